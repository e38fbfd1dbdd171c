//! Serializer Invariant Tests
//!
//! End-to-end properties of the serialization layer:
//! - Leaf output carries exactly the declared field names, plus notes
//! - The notes key is always a list, even when empty
//! - Composite output nests exactly the matching child records
//! - Undeclared relationships are hard errors, never partial output
//! - Serialization is a pure function of the inputs
//! - CLI-rendered output is byte-stable across invocations

use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::json;

use tempfile::TempDir;

use sisdata::cli;
use sisdata::dataset::{self, Dataset};
use sisdata::model::{
    Attachment, Attendance, Behavior, Bookmark, Calendar, Course, District, EntityKind, EntityRef,
    Grade, Note, Referral, School, Student, declared_fields, ALL_KINDS,
};
use sisdata::serializer::{serialize, ChildSetSerializer, SerializerError};

// =============================================================================
// Fixture
// =============================================================================

/// One record of every kind, with consistent references and one note
/// per student record.
fn full_dataset() -> Dataset {
    let mut ds = Dataset::new();
    ds.districts.push(District {
        id: 5,
        code: "D05".into(),
        city: "Denver".into(),
        state: "CO".into(),
        name: "Denver Public".into(),
    });
    ds.schools.push(School {
        id: 1,
        district: 5,
        name: "Lincoln".into(),
    });
    ds.students.push(Student {
        id: 7,
        current_school: 1,
        current_program: 1,
        first_name: "Maya".into(),
        last_name: "Ortiz".into(),
        middle_name: "L".into(),
        gender: "F".into(),
        birth_date: NaiveDate::from_ymd_opt(2006, 9, 14).unwrap(),
        state_id: 440021,
        grade_year: 10,
        reason_in_program: "referral".into(),
    });
    ds.students.push(Student {
        id: 9,
        current_school: 1,
        current_program: 1,
        first_name: "Eli".into(),
        last_name: "Navarro".into(),
        middle_name: "J".into(),
        gender: "M".into(),
        birth_date: NaiveDate::from_ymd_opt(2005, 2, 3).unwrap(),
        state_id: 440022,
        grade_year: 11,
        reason_in_program: "attendance".into(),
    });
    ds.courses.push(Course {
        id: 2,
        school: 1,
        name: "Algebra".into(),
        code: "MA101".into(),
        subject: "math".into(),
    });
    ds.calendars.push(Calendar {
        id: 3,
        year: 2019,
        term: "Fall".into(),
    });
    for (id, student, grade) in [(1, 7, "B+"), (2, 7, "A-"), (3, 9, "C")] {
        ds.grades.push(Grade {
            id,
            student,
            course: 2,
            calendar: 3,
            program: 1,
            entry_datetime: Utc.with_ymd_and_hms(2019, 10, 1, 9, 0, 0).unwrap(),
            period: 2,
            grade: grade.into(),
            term_final_value: false,
        });
    }
    ds.attendance.push(Attendance {
        id: 1,
        student: 7,
        school: 1,
        calendar: 3,
        program: 1,
        entry_datetime: Utc.with_ymd_and_hms(2019, 10, 2, 9, 0, 0).unwrap(),
        total_unexabs: 2,
        total_exabs: 1,
        total_tardies: 4,
        avg_daily_attendance: 0.93,
        term_final_value: false,
    });
    ds.behaviors.push(Behavior {
        id: 1,
        student: 7,
        school: 1,
        calendar: 3,
        program: 1,
        period: 3,
        incident_datetime: Utc.with_ymd_and_hms(2019, 10, 3, 13, 0, 0).unwrap(),
        context: "hallway".into(),
        incident_type_program: "disruption".into(),
        incident_result_program: "warning".into(),
        incident_type_school: "disruption".into(),
        incident_result_school: "detention".into(),
    });
    ds.referrals.push(Referral {
        id: 1,
        user: 10,
        student: 7,
        program: 1,
        referral_type: "counseling".into(),
        date_given: NaiveDate::from_ymd_opt(2019, 4, 2).unwrap(),
        reference_name: "A. Jones".into(),
        reference_phone: "555-0100".into(),
        reference_address: "12 Main St".into(),
        reason: "attendance".into(),
    });
    ds.bookmarks.push(Bookmark {
        id: 1,
        user: 10,
        url: "/students/7".into(),
        created: Utc.with_ymd_and_hms(2019, 10, 4, 8, 0, 0).unwrap(),
        json_request_data: json!({"tab": "grades"}),
    });
    ds.notes.push(Note {
        user: 10,
        created: Utc.with_ymd_and_hms(2019, 10, 5, 8, 0, 0).unwrap(),
        text: "guardian meeting held".into(),
        attachment: Attachment::new(EntityKind::Student, 7),
    });
    ds
}

fn first_of(ds: &Dataset, kind: EntityKind) -> EntityRef<'_> {
    ds.iter_kind(kind).next().unwrap()
}

// =============================================================================
// Leaf Field-Set Tests
// =============================================================================

/// Every kind's leaf output carries exactly the declared field names
/// plus the notes list.
#[test]
fn test_leaf_keys_match_declared_fields() {
    let ds = full_dataset();

    for kind in ALL_KINDS {
        let value = serialize(first_of(&ds, kind), &ds);
        let obj = value.as_object().unwrap();

        let mut expected: Vec<&str> = declared_fields(kind).iter().map(|f| f.name).collect();
        expected.push("notes");

        assert_eq!(obj.len(), expected.len(), "key count for {}", kind);
        for name in expected {
            assert!(obj.contains_key(name), "{} missing key '{}'", kind, name);
        }
    }
}

/// Leaf values equal the source record's attributes; reference fields
/// carry bare ids.
#[test]
fn test_leaf_values_match_record() {
    let ds = full_dataset();
    let value = serialize(first_of(&ds, EntityKind::Grade), &ds);

    assert_eq!(value["id"], json!(1));
    assert_eq!(value["student"], json!(7));
    assert_eq!(value["course"], json!(2));
    assert_eq!(value["grade"], json!("B+"));
    assert_eq!(value["term_final_value"], json!(false));
    // Reference fields never nest objects.
    assert!(value["student"].is_i64());
}

/// The notes key is always present and always a list.
#[test]
fn test_notes_always_a_list() {
    let ds = full_dataset();

    for kind in ALL_KINDS {
        let value = serialize(first_of(&ds, kind), &ds);
        assert!(value["notes"].is_array(), "{} notes must be a list", kind);
    }

    // Student 7 has one note; every other record has none.
    let student = serialize(first_of(&ds, EntityKind::Student), &ds);
    assert_eq!(student["notes"].as_array().unwrap().len(), 1);
    let school = serialize(first_of(&ds, EntityKind::School), &ds);
    assert_eq!(school["notes"], json!([]));
}

/// The worked example: {id=1, name="Lincoln", district=5, notes=[]}.
#[test]
fn test_school_example_shape() {
    let mut ds = Dataset::new();
    ds.schools.push(School {
        id: 1,
        district: 5,
        name: "Lincoln".into(),
    });

    let value = serialize(first_of(&ds, EntityKind::School), &ds);
    assert_eq!(
        value,
        json!({"id": 1, "district": 5, "name": "Lincoln", "notes": []})
    );
}

// =============================================================================
// Composite Tests
// =============================================================================

/// Child sets contain exactly the records whose relationship field
/// equals the parent id, in the dataset's natural order.
#[test]
fn test_composite_filters_on_parent_id() {
    let ds = full_dataset();
    let student7 = first_of(&ds, EntityKind::Student);

    let value = ChildSetSerializer::new(student7, [EntityKind::Grade])
        .render(&ds)
        .unwrap();

    let grades = value["Grade"].as_array().unwrap();
    assert_eq!(grades.len(), 2);
    assert_eq!(grades[0]["id"], json!(1));
    assert_eq!(grades[1]["id"], json!(2));
    // Grade 3 belongs to student 9 and must not appear.
    assert!(grades.iter().all(|g| g["student"] == json!(7)));
}

/// Zero child kinds returns exactly the parent's leaf mapping.
#[test]
fn test_composite_zero_children_equals_leaf() {
    let ds = full_dataset();
    let parent = first_of(&ds, EntityKind::District);

    let composite = ChildSetSerializer::new(parent, []).render(&ds).unwrap();
    assert_eq!(composite, serialize(parent, &ds));
}

/// Multiple child kinds nest in request order under TypeName keys.
#[test]
fn test_composite_multiple_child_kinds() {
    let ds = full_dataset();
    let student7 = first_of(&ds, EntityKind::Student);

    let value = ChildSetSerializer::new(
        student7,
        [
            EntityKind::Grade,
            EntityKind::Attendance,
            EntityKind::Behavior,
            EntityKind::Referral,
        ],
    )
    .render(&ds)
    .unwrap();

    assert_eq!(value["Grade"].as_array().unwrap().len(), 2);
    assert_eq!(value["Attendance"].as_array().unwrap().len(), 1);
    assert_eq!(value["Behavior"].as_array().unwrap().len(), 1);
    assert_eq!(value["Referral"].as_array().unwrap().len(), 1);
}

/// A child kind with no qualifying relationship raises the
/// no-relationship error; no partial structure comes back.
#[test]
fn test_composite_no_relationship_error() {
    let ds = full_dataset();
    let district = first_of(&ds, EntityKind::District);

    let result = ChildSetSerializer::new(district, [EntityKind::Grade]).render(&ds);
    assert_eq!(
        result.unwrap_err(),
        SerializerError::NoRelationship {
            parent: EntityKind::District,
            child: EntityKind::Grade,
        }
    );
}

/// A student is related to its school only through `current_school`,
/// which does not satisfy the parent-tag naming rule.
#[test]
fn test_school_to_student_has_no_relationship() {
    let ds = full_dataset();
    let school = first_of(&ds, EntityKind::School);

    let result = ChildSetSerializer::new(school, [EntityKind::Student]).render(&ds);
    assert!(matches!(
        result,
        Err(SerializerError::NoRelationship { .. })
    ));
}

// =============================================================================
// Purity Tests
// =============================================================================

/// Serializing the same record twice yields identical output.
#[test]
fn test_serialization_is_idempotent() {
    let ds = full_dataset();

    for kind in ALL_KINDS {
        let first = serialize(first_of(&ds, kind), &ds);
        let second = serialize(first_of(&ds, kind), &ds);
        assert_eq!(first, second, "{} leaf output must be stable", kind);
    }

    let student7 = first_of(&ds, EntityKind::Student);
    let composite = ChildSetSerializer::new(student7, [EntityKind::Grade, EntityKind::Behavior]);
    assert_eq!(composite.render(&ds).unwrap(), composite.render(&ds).unwrap());
}

/// Rendering the same composite through the CLI twice produces
/// byte-identical output, on both the compact and pretty paths.
///
/// Value equality alone would not pin this: byte stability also
/// depends on the map's deterministic key ordering and the Display
/// formatting the CLI prints through.
#[test]
fn test_cli_render_is_byte_stable() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("ds.json");
    dataset::save(&full_dataset(), &path).unwrap();

    let children = [EntityKind::Grade, EntityKind::Behavior];
    let first = cli::render(&path, EntityKind::Student, 7, &children, None).unwrap();
    let second = cli::render(&path, EntityKind::Student, 7, &children, None).unwrap();

    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(format!("{:#}", first), format!("{:#}", second));
}
