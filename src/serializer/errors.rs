//! Serializer error types

use thiserror::Error;

use crate::model::{EntityId, EntityKind};

/// Result type for serializer operations
pub type SerializerResult<T> = Result<T, SerializerError>;

/// Errors raised during composite or view serialization.
///
/// Leaf serialization of a well-formed record cannot fail; these cover
/// the relationship lookup and record resolution steps. There are no
/// partial results: any error aborts the whole rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerializerError {
    /// Requested a child set for a pair with no declared relationship.
    ///
    /// Raised instead of silently binding to an unrelated field when no
    /// foreign key on the child is named after the parent's tag.
    #[error("no relationship found: {child} has no foreign key named '{parent}'")]
    NoRelationship {
        parent: EntityKind,
        child: EntityKind,
    },

    /// A record required by a view does not exist in the dataset.
    #[error("missing record: {kind} {id}")]
    MissingRecord { kind: EntityKind, id: EntityId },
}
