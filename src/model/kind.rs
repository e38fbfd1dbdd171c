//! Entity kind tags
//!
//! Every primary record type carries a stable lowercase tag used for:
//! - note attachments (the content_type half of the pair)
//! - relationship lookups (a child's foreign-key field is named after
//!   the parent's tag)
//! - CLI arguments (`--kind student`)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of primary entity kinds.
///
/// `Note` is not a kind: notes attach to these kinds and have no
/// children of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    District,
    School,
    Student,
    Course,
    Calendar,
    Grade,
    Attendance,
    Behavior,
    Referral,
    Bookmark,
}

/// All kinds, in declaration order. Used by the CLI and the integrity
/// checker to sweep every collection.
pub const ALL_KINDS: [EntityKind; 10] = [
    EntityKind::District,
    EntityKind::School,
    EntityKind::Student,
    EntityKind::Course,
    EntityKind::Calendar,
    EntityKind::Grade,
    EntityKind::Attendance,
    EntityKind::Behavior,
    EntityKind::Referral,
    EntityKind::Bookmark,
];

impl EntityKind {
    /// Stable lowercase tag (`"district"`, `"school"`, ...).
    pub fn tag(&self) -> &'static str {
        match self {
            EntityKind::District => "district",
            EntityKind::School => "school",
            EntityKind::Student => "student",
            EntityKind::Course => "course",
            EntityKind::Calendar => "calendar",
            EntityKind::Grade => "grade",
            EntityKind::Attendance => "attendance",
            EntityKind::Behavior => "behavior",
            EntityKind::Referral => "referral",
            EntityKind::Bookmark => "bookmark",
        }
    }

    /// Capitalized type name, used as the nesting key in composite
    /// output (`"Grade"`, `"Attendance"`, ...).
    pub fn type_name(&self) -> &'static str {
        match self {
            EntityKind::District => "District",
            EntityKind::School => "School",
            EntityKind::Student => "Student",
            EntityKind::Course => "Course",
            EntityKind::Calendar => "Calendar",
            EntityKind::Grade => "Grade",
            EntityKind::Attendance => "Attendance",
            EntityKind::Behavior => "Behavior",
            EntityKind::Referral => "Referral",
            EntityKind::Bookmark => "Bookmark",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_KINDS
            .iter()
            .copied()
            .find(|k| k.tag() == s)
            .ok_or_else(|| format!("unknown entity kind '{}'", s))
    }
}
