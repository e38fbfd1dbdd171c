//! Leaf serializers
//!
//! One serializer per entity kind: record in, JSON object out. The
//! object's keys are exactly the kind's declared field names plus
//! `notes`, which is always a list (possibly empty) of serialized
//! notes. Reference fields carry the bare id of the referenced row.
//!
//! The field mapping comes from the record's serde derive, so the
//! output keys cannot drift from the struct definitions; a test in
//! `tests/serializer_invariants.rs` pins them to the declared field
//! metadata.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::dataset::Dataset;
use crate::model::{
    Attendance, Behavior, Bookmark, Calendar, Course, District, EntityId, EntityKind, Grade, Note,
    Referral, School, Student,
};

/// Serializes one note to its wire shape:
/// `{user, created, text, content_type, object_id, content_object}`.
pub fn note(note: &Note) -> Value {
    let mut obj = to_object(note);
    obj.insert(
        "content_object".to_string(),
        Value::String(note.attachment.label()),
    );
    Value::Object(obj)
}

/// Serializes a list of notes, preserving the given order.
pub fn note_list(notes: &[&Note]) -> Value {
    Value::Array(notes.iter().map(|n| note(n)).collect())
}

pub fn district(record: &District, ds: &Dataset) -> Value {
    with_notes(record, EntityKind::District, record.id, ds)
}

pub fn school(record: &School, ds: &Dataset) -> Value {
    with_notes(record, EntityKind::School, record.id, ds)
}

pub fn student(record: &Student, ds: &Dataset) -> Value {
    with_notes(record, EntityKind::Student, record.id, ds)
}

pub fn course(record: &Course, ds: &Dataset) -> Value {
    with_notes(record, EntityKind::Course, record.id, ds)
}

pub fn calendar(record: &Calendar, ds: &Dataset) -> Value {
    with_notes(record, EntityKind::Calendar, record.id, ds)
}

pub fn grade(record: &Grade, ds: &Dataset) -> Value {
    with_notes(record, EntityKind::Grade, record.id, ds)
}

pub fn attendance(record: &Attendance, ds: &Dataset) -> Value {
    with_notes(record, EntityKind::Attendance, record.id, ds)
}

pub fn behavior(record: &Behavior, ds: &Dataset) -> Value {
    with_notes(record, EntityKind::Behavior, record.id, ds)
}

pub fn referral(record: &Referral, ds: &Dataset) -> Value {
    with_notes(record, EntityKind::Referral, record.id, ds)
}

pub fn bookmark(record: &Bookmark, ds: &Dataset) -> Value {
    with_notes(record, EntityKind::Bookmark, record.id, ds)
}

/// Field mapping of the record plus its attached notes.
fn with_notes<T: Serialize>(record: &T, kind: EntityKind, id: EntityId, ds: &Dataset) -> Value {
    let mut obj = to_object(record);
    obj.insert("notes".to_string(), note_list(&ds.notes_for(kind, id)));
    Value::Object(obj)
}

/// Serde field mapping of a record. Record types serialize to objects
/// and contain nothing unserializable, so this cannot fail.
fn to_object<T: Serialize>(record: &T) -> Map<String, Value> {
    match serde_json::to_value(record).expect("record serialization cannot fail") {
        Value::Object(obj) => obj,
        _ => unreachable!("record types serialize to JSON objects"),
    }
}
