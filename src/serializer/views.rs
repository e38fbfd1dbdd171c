//! Student report views
//!
//! Purpose-built student shapes beyond the plain leaf output:
//! - summary: roster listing with the current school nested in full
//! - grades: name plus every grade serialized in full
//! - transcript: grades pared to value and term-final flag
//!
//! Views resolve related records themselves; a reference that does not
//! resolve is a `MissingRecord` error, not a null in the output.

use serde_json::{json, Value};

use crate::dataset::Dataset;
use crate::model::{EntityKind, Student};

use super::errors::{SerializerError, SerializerResult};
use super::leaf;

/// Roster summary: names and birth date, with the student's current
/// school nested as its full leaf object.
pub fn student_summary(student: &Student, ds: &Dataset) -> SerializerResult<Value> {
    let school = ds
        .school(student.current_school)
        .ok_or(SerializerError::MissingRecord {
            kind: EntityKind::School,
            id: student.current_school,
        })?;

    Ok(json!({
        "id": student.id,
        "first_name": student.first_name,
        "last_name": student.last_name,
        "middle_name": student.middle_name,
        "current_school": leaf::school(school, ds),
        "birth_date": student.birth_date,
        "notes": leaf::note_list(&ds.notes_for(EntityKind::Student, student.id)),
    }))
}

/// Name plus the student's full serialized grade list.
pub fn student_grades(student: &Student, ds: &Dataset) -> SerializerResult<Value> {
    let grades: Vec<Value> = ds
        .grades_for_student(student.id)
        .into_iter()
        .map(|g| leaf::grade(g, ds))
        .collect();

    Ok(json!({
        "first_name": student.first_name,
        "last_name": student.last_name,
        "grades": grades,
        "notes": leaf::note_list(&ds.notes_for(EntityKind::Student, student.id)),
    }))
}

/// Transcript: grades pared to `{grade, term_final_value}`, plus the
/// birth date under `birthday`.
pub fn student_transcript(student: &Student, ds: &Dataset) -> SerializerResult<Value> {
    let grade_set: Vec<Value> = ds
        .grades_for_student(student.id)
        .into_iter()
        .map(|g| {
            json!({
                "grade": g.grade,
                "term_final_value": g.term_final_value,
            })
        })
        .collect();

    Ok(json!({
        "grade_set": grade_set,
        "birthday": student.birth_date,
        "notes": leaf::note_list(&ds.notes_for(EntityKind::Student, student.id)),
    }))
}
