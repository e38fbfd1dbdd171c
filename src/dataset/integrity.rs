//! Referential-integrity checking
//!
//! Verifies that every internal foreign-key value and every note
//! attachment resolves to an existing record. References to external
//! rows (`program`, `user`) are not checked here.
//!
//! The checker reports all violations rather than stopping at the
//! first, so one pass over a fixture file surfaces every problem.

use std::fmt;

use crate::model::{EntityId, EntityKind};

use super::store::Dataset;

/// One broken reference found in a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A record's foreign-key field points at a nonexistent record.
    DanglingReference {
        record: EntityKind,
        record_id: EntityId,
        field: &'static str,
        target: EntityKind,
        target_id: EntityId,
    },
    /// A note's attachment points at a nonexistent record.
    DanglingNote {
        note_index: usize,
        target: EntityKind,
        target_id: EntityId,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DanglingReference {
                record,
                record_id,
                field,
                target,
                target_id,
            } => write!(
                f,
                "{} {} field '{}' references missing {} {}",
                record, record_id, field, target, target_id
            ),
            Violation::DanglingNote {
                note_index,
                target,
                target_id,
            } => write!(
                f,
                "note #{} attached to missing {} {}",
                note_index, target, target_id
            ),
        }
    }
}

/// Checks every internal reference in the dataset and returns all
/// violations found. An empty result means the dataset is consistent.
pub fn check(ds: &Dataset) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut require =
        |record: EntityKind, record_id: EntityId, field: &'static str, target: EntityKind, target_id: EntityId| {
            if !ds.contains(target, target_id) {
                violations.push(Violation::DanglingReference {
                    record,
                    record_id,
                    field,
                    target,
                    target_id,
                });
            }
        };

    for school in &ds.schools {
        require(
            EntityKind::School,
            school.id,
            "district",
            EntityKind::District,
            school.district,
        );
    }

    for student in &ds.students {
        require(
            EntityKind::Student,
            student.id,
            "current_school",
            EntityKind::School,
            student.current_school,
        );
    }

    for course in &ds.courses {
        require(
            EntityKind::Course,
            course.id,
            "school",
            EntityKind::School,
            course.school,
        );
    }

    for grade in &ds.grades {
        require(
            EntityKind::Grade,
            grade.id,
            "student",
            EntityKind::Student,
            grade.student,
        );
        require(
            EntityKind::Grade,
            grade.id,
            "course",
            EntityKind::Course,
            grade.course,
        );
        require(
            EntityKind::Grade,
            grade.id,
            "calendar",
            EntityKind::Calendar,
            grade.calendar,
        );
    }

    for att in &ds.attendance {
        require(
            EntityKind::Attendance,
            att.id,
            "student",
            EntityKind::Student,
            att.student,
        );
        require(
            EntityKind::Attendance,
            att.id,
            "school",
            EntityKind::School,
            att.school,
        );
        require(
            EntityKind::Attendance,
            att.id,
            "calendar",
            EntityKind::Calendar,
            att.calendar,
        );
    }

    for behavior in &ds.behaviors {
        require(
            EntityKind::Behavior,
            behavior.id,
            "student",
            EntityKind::Student,
            behavior.student,
        );
        require(
            EntityKind::Behavior,
            behavior.id,
            "school",
            EntityKind::School,
            behavior.school,
        );
        require(
            EntityKind::Behavior,
            behavior.id,
            "calendar",
            EntityKind::Calendar,
            behavior.calendar,
        );
    }

    for referral in &ds.referrals {
        require(
            EntityKind::Referral,
            referral.id,
            "student",
            EntityKind::Student,
            referral.student,
        );
    }

    for (index, note) in ds.notes.iter().enumerate() {
        if !ds.contains(note.attachment.content_type, note.attachment.object_id) {
            violations.push(Violation::DanglingNote {
                note_index: index,
                target: note.attachment.content_type,
                target_id: note.attachment.object_id,
            });
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::model::{Attachment, District, Note, School};

    fn consistent_dataset() -> Dataset {
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
        ds.notes.push(Note {
            user: 2,
            created: Utc.with_ymd_and_hms(2019, 5, 1, 9, 0, 0).unwrap(),
            text: "ok".into(),
            attachment: Attachment::new(EntityKind::School, 1),
        });
        ds
    }

    #[test]
    fn test_consistent_dataset_has_no_violations() {
        assert!(check(&consistent_dataset()).is_empty());
    }

    #[test]
    fn test_dangling_school_district() {
        let mut ds = consistent_dataset();
        ds.schools.push(School {
            id: 2,
            district: 99,
            name: "Orphan".into(),
        });

        let violations = check(&ds);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0],
            Violation::DanglingReference {
                record: EntityKind::School,
                record_id: 2,
                field: "district",
                target: EntityKind::District,
                target_id: 99,
            }
        );
    }

    #[test]
    fn test_dangling_note_attachment() {
        let mut ds = consistent_dataset();
        ds.notes.push(Note {
            user: 2,
            created: Utc.with_ymd_and_hms(2019, 5, 2, 9, 0, 0).unwrap(),
            text: "lost".into(),
            attachment: Attachment::new(EntityKind::Student, 7),
        });

        let violations = check(&ds);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0],
            Violation::DanglingNote {
                note_index: 1,
                target: EntityKind::Student,
                target_id: 7,
            }
        ));
    }

    #[test]
    fn test_all_violations_reported() {
        let mut ds = Dataset::new();
        ds.schools.push(School {
            id: 1,
            district: 99,
            name: "Orphan".into(),
        });
        ds.notes.push(Note {
            user: 2,
            created: Utc.with_ymd_and_hms(2019, 5, 1, 9, 0, 0).unwrap(),
            text: "lost".into(),
            attachment: Attachment::new(EntityKind::District, 42),
        });

        assert_eq!(check(&ds).len(), 2);
    }
}
