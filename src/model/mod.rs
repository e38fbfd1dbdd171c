//! Entity model for the student-records domain
//!
//! Typed records, their kind tags, note attachments, and the static
//! field metadata the serialization layer is driven by.
//!
//! Records are created, updated, and deleted by collaborators outside
//! this crate; everything here is a plain value type.

mod entities;
mod entity;
mod fields;
mod kind;
mod note;

pub use entities::{
    Attendance, Behavior, Bookmark, Calendar, Course, District, EntityId, Grade, Referral, School,
    Student,
};
pub use entity::EntityRef;
pub use fields::{declared_fields, relationship_field, FieldRole, FieldSpec};
pub use kind::{EntityKind, ALL_KINDS};
pub use note::{Attachment, Note};
