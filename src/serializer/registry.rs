//! Typed serializer dispatch
//!
//! Dispatch is an exhaustive match over `EntityRef` rather than a
//! name-to-serializer lookup table: every kind has a leaf serializer
//! and an invalid kind is unrepresentable, so nothing can fail at
//! call time.

use serde_json::Value;

use crate::dataset::Dataset;
use crate::model::EntityRef;

use super::leaf;

/// Serializes one record of any kind with its leaf serializer.
pub fn serialize(entity: EntityRef<'_>, ds: &Dataset) -> Value {
    match entity {
        EntityRef::District(r) => leaf::district(r, ds),
        EntityRef::School(r) => leaf::school(r, ds),
        EntityRef::Student(r) => leaf::student(r, ds),
        EntityRef::Course(r) => leaf::course(r, ds),
        EntityRef::Calendar(r) => leaf::calendar(r, ds),
        EntityRef::Grade(r) => leaf::grade(r, ds),
        EntityRef::Attendance(r) => leaf::attendance(r, ds),
        EntityRef::Behavior(r) => leaf::behavior(r, ds),
        EntityRef::Referral(r) => leaf::referral(r, ds),
        EntityRef::Bookmark(r) => leaf::bookmark(r, ds),
    }
}

/// Serializes a sequence of records, preserving its order.
pub fn serialize_many<'a>(
    entities: impl IntoIterator<Item = EntityRef<'a>>,
    ds: &Dataset,
) -> Value {
    Value::Array(entities.into_iter().map(|e| serialize(e, ds)).collect())
}
