//! In-memory record store
//!
//! `Dataset` stands in for the data-access collaborator: it holds every
//! record collection plus the notes, and answers the two queries the
//! serializers need — "all records of kind K" and "all notes attached
//! to record (K, id)". Collections keep their insertion order; filtered
//! results preserve it.

use serde::{Deserialize, Serialize};

use crate::model::{
    Attendance, Behavior, Bookmark, Calendar, Course, District, EntityId, EntityKind, EntityRef,
    Grade, Note, Referral, School, Student,
};

/// All record collections for one serialization request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub districts: Vec<District>,
    #[serde(default)]
    pub schools: Vec<School>,
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub calendars: Vec<Calendar>,
    #[serde(default)]
    pub grades: Vec<Grade>,
    /// "attendance" is its own plural; the JSON fixture key is
    /// deliberately singular, matching the kind tag.
    #[serde(default)]
    pub attendance: Vec<Attendance>,
    #[serde(default)]
    pub behaviors: Vec<Behavior>,
    #[serde(default)]
    pub referrals: Vec<Referral>,
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates every record of the given kind, in insertion order.
    pub fn iter_kind(&self, kind: EntityKind) -> Box<dyn Iterator<Item = EntityRef<'_>> + '_> {
        match kind {
            EntityKind::District => Box::new(self.districts.iter().map(EntityRef::from)),
            EntityKind::School => Box::new(self.schools.iter().map(EntityRef::from)),
            EntityKind::Student => Box::new(self.students.iter().map(EntityRef::from)),
            EntityKind::Course => Box::new(self.courses.iter().map(EntityRef::from)),
            EntityKind::Calendar => Box::new(self.calendars.iter().map(EntityRef::from)),
            EntityKind::Grade => Box::new(self.grades.iter().map(EntityRef::from)),
            EntityKind::Attendance => Box::new(self.attendance.iter().map(EntityRef::from)),
            EntityKind::Behavior => Box::new(self.behaviors.iter().map(EntityRef::from)),
            EntityKind::Referral => Box::new(self.referrals.iter().map(EntityRef::from)),
            EntityKind::Bookmark => Box::new(self.bookmarks.iter().map(EntityRef::from)),
        }
    }

    /// Looks up a record of the given kind by primary key.
    pub fn find(&self, kind: EntityKind, id: EntityId) -> Option<EntityRef<'_>> {
        self.iter_kind(kind).find(|e| e.id() == id)
    }

    /// Whether a record of the given kind exists with this id.
    pub fn contains(&self, kind: EntityKind, id: EntityId) -> bool {
        self.find(kind, id).is_some()
    }

    /// All notes attached to record (kind, id), in insertion order.
    ///
    /// Always answerable: a record with no notes yields an empty list.
    pub fn notes_for(&self, kind: EntityKind, id: EntityId) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|n| n.attached_to(kind, id))
            .collect()
    }

    /// Looks up a school by id (used by the student summary view).
    pub fn school(&self, id: EntityId) -> Option<&School> {
        self.schools.iter().find(|s| s.id == id)
    }

    /// All grades for a student, in insertion order (student views).
    pub fn grades_for_student(&self, student_id: EntityId) -> Vec<&Grade> {
        self.grades
            .iter()
            .filter(|g| g.student == student_id)
            .collect()
    }

    /// Record count for one kind.
    pub fn count(&self, kind: EntityKind) -> usize {
        self.iter_kind(kind).count()
    }
}
