//! Free-text notes and their polymorphic attachment
//!
//! A note attaches to exactly one primary record through a tagged
//! (kind, id) pair. The tag is the typed `EntityKind`, so an attachment
//! to a nonexistent kind is unrepresentable; a dangling id is caught by
//! the dataset integrity checker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entities::EntityId;
use super::kind::EntityKind;

/// Typed attachment target: which record a note hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Kind of the target record (serialized as `content_type`).
    pub content_type: EntityKind,
    /// Id of the target record (serialized as `object_id`).
    pub object_id: EntityId,
}

impl Attachment {
    pub fn new(content_type: EntityKind, object_id: EntityId) -> Self {
        Self {
            content_type,
            object_id,
        }
    }

    /// Compact `"tag:id"` label for the target, e.g. `"student:7"`.
    ///
    /// Serialized notes carry this under `content_object`. Embedding the
    /// target's full leaf output would recurse through the target's own
    /// notes, so the label stands in for it.
    pub fn label(&self) -> String {
        format!("{}:{}", self.content_type.tag(), self.object_id)
    }
}

/// A free-text note left by a staff user on any primary record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Staff user who wrote the note (external row).
    pub user: EntityId,
    pub created: DateTime<Utc>,
    pub text: String,
    #[serde(flatten)]
    pub attachment: Attachment,
}

impl Note {
    /// Whether this note is attached to the given record.
    pub fn attached_to(&self, kind: EntityKind, id: EntityId) -> bool {
        self.attachment.content_type == kind && self.attachment.object_id == id
    }
}
