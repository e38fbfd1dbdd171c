//! Composite parent-plus-children serialization
//!
//! Serializes one parent record together with the sets of child
//! records that point back at it: the parent's leaf object gains one
//! key per requested child kind, named with the kind's TypeName and
//! holding the filtered, serialized list.
//!
//! Only one level of traversal is supported: a child's own children
//! are never expanded.

use serde_json::Value;

use crate::dataset::Dataset;
use crate::model::{EntityKind, EntityRef};

use super::errors::SerializerResult;
use super::registry;
use super::relations;

/// Serializer for a parent record and its related child sets.
pub struct ChildSetSerializer<'a> {
    parent: EntityRef<'a>,
    child_kinds: Vec<EntityKind>,
}

impl<'a> ChildSetSerializer<'a> {
    /// Creates a serializer for `parent` and the given child kinds.
    ///
    /// Child kinds are rendered in the order given. Requesting the
    /// same kind twice is allowed; the later request overwrites the
    /// earlier one's key (last write wins).
    pub fn new(parent: EntityRef<'a>, child_kinds: impl IntoIterator<Item = EntityKind>) -> Self {
        Self {
            parent,
            child_kinds: child_kinds.into_iter().collect(),
        }
    }

    /// Renders the parent with its child sets nested inside.
    ///
    /// With zero child kinds this is exactly the parent's leaf output.
    /// A child kind with no declared relationship to the parent aborts
    /// the whole rendering with `NoRelationship`; no partial structure
    /// is returned.
    pub fn render(&self, ds: &Dataset) -> SerializerResult<Value> {
        // Resolve every relationship before building anything, so a
        // bad request cannot leave earlier child sets behind.
        let mut resolved = Vec::with_capacity(self.child_kinds.len());
        for child in &self.child_kinds {
            resolved.push(relations::relation(self.parent.kind(), *child)?);
        }

        let mut value = registry::serialize(self.parent, ds);
        let obj = value
            .as_object_mut()
            .expect("leaf serializers emit JSON objects");

        let parent_id = self.parent.id();
        for rel in resolved {
            let children = registry::serialize_many(
                ds.iter_kind(rel.child)
                    .filter(|c| rel.points_at(*c, parent_id)),
                ds,
            );
            obj.insert(rel.child.type_name().to_string(), children);
        }

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use crate::model::{Calendar, Course, Grade, School, Student};
    use crate::serializer::SerializerError;

    fn sample_dataset() -> Dataset {
        let mut ds = Dataset::new();
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
            birth_date: chrono::NaiveDate::from_ymd_opt(2006, 9, 14).unwrap(),
            state_id: 440021,
            grade_year: 10,
            reason_in_program: "referral".into(),
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
        ds
    }

    #[test]
    fn test_children_filtered_by_parent_id() {
        let ds = sample_dataset();
        let student = &ds.students[0];
        let value = ChildSetSerializer::new(EntityRef::from(student), [EntityKind::Grade])
            .render(&ds)
            .unwrap();

        let grades = value["Grade"].as_array().unwrap();
        assert_eq!(grades.len(), 2);
        assert_eq!(grades[0]["id"], json!(1));
        assert_eq!(grades[1]["id"], json!(2));
    }

    #[test]
    fn test_zero_child_kinds_is_leaf_output() {
        let ds = sample_dataset();
        let student = &ds.students[0];
        let parent = EntityRef::from(student);

        let composite = ChildSetSerializer::new(parent, []).render(&ds).unwrap();
        let leaf = registry::serialize(parent, &ds);
        assert_eq!(composite, leaf);
    }

    #[test]
    fn test_empty_child_set_is_empty_list() {
        let ds = sample_dataset();
        let school = &ds.schools[0];
        let value = ChildSetSerializer::new(EntityRef::from(school), [EntityKind::Attendance])
            .render(&ds)
            .unwrap();

        assert_eq!(value["Attendance"], json!([]));
    }

    #[test]
    fn test_no_relationship_aborts_whole_render() {
        let ds = sample_dataset();
        let student = &ds.students[0];
        // Grade is valid, Bookmark is not; nothing may be returned.
        let result = ChildSetSerializer::new(
            EntityRef::from(student),
            [EntityKind::Grade, EntityKind::Bookmark],
        )
        .render(&ds);

        assert_eq!(
            result.unwrap_err(),
            SerializerError::NoRelationship {
                parent: EntityKind::Student,
                child: EntityKind::Bookmark,
            }
        );
    }

    #[test]
    fn test_duplicate_child_kind_last_write_wins() {
        let ds = sample_dataset();
        let student = &ds.students[0];
        let value = ChildSetSerializer::new(
            EntityRef::from(student),
            [EntityKind::Grade, EntityKind::Grade],
        )
        .render(&ds)
        .unwrap();

        // One key, still the full filtered set.
        assert_eq!(value["Grade"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_children_are_not_expanded() {
        let ds = sample_dataset();
        let school = &ds.schools[0];
        let value = ChildSetSerializer::new(EntityRef::from(school), [EntityKind::Course])
            .render(&ds)
            .unwrap();

        // Course records nest under the school, but their own grades
        // do not appear.
        let courses = value["Course"].as_array().unwrap();
        assert_eq!(courses.len(), 1);
        assert!(courses[0].get("Grade").is_none());
    }
}
