//! Borrowed sum over the primary record types
//!
//! `EntityRef` lets the serializer registry and the composite
//! serializer dispatch over records of any kind without cloning them
//! out of the dataset.

use super::entities::{
    Attendance, Behavior, Bookmark, Calendar, Course, District, EntityId, Grade, Referral, School,
    Student,
};
use super::kind::EntityKind;

/// A borrowed record of any primary kind.
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    District(&'a District),
    School(&'a School),
    Student(&'a Student),
    Course(&'a Course),
    Calendar(&'a Calendar),
    Grade(&'a Grade),
    Attendance(&'a Attendance),
    Behavior(&'a Behavior),
    Referral(&'a Referral),
    Bookmark(&'a Bookmark),
}

impl EntityRef<'_> {
    /// Kind of the borrowed record.
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::District(_) => EntityKind::District,
            EntityRef::School(_) => EntityKind::School,
            EntityRef::Student(_) => EntityKind::Student,
            EntityRef::Course(_) => EntityKind::Course,
            EntityRef::Calendar(_) => EntityKind::Calendar,
            EntityRef::Grade(_) => EntityKind::Grade,
            EntityRef::Attendance(_) => EntityKind::Attendance,
            EntityRef::Behavior(_) => EntityKind::Behavior,
            EntityRef::Referral(_) => EntityKind::Referral,
            EntityRef::Bookmark(_) => EntityKind::Bookmark,
        }
    }

    /// Primary key of the borrowed record.
    pub fn id(&self) -> EntityId {
        match self {
            EntityRef::District(r) => r.id,
            EntityRef::School(r) => r.id,
            EntityRef::Student(r) => r.id,
            EntityRef::Course(r) => r.id,
            EntityRef::Calendar(r) => r.id,
            EntityRef::Grade(r) => r.id,
            EntityRef::Attendance(r) => r.id,
            EntityRef::Behavior(r) => r.id,
            EntityRef::Referral(r) => r.id,
            EntityRef::Bookmark(r) => r.id,
        }
    }
}

impl<'a> From<&'a District> for EntityRef<'a> {
    fn from(r: &'a District) -> Self {
        EntityRef::District(r)
    }
}

impl<'a> From<&'a School> for EntityRef<'a> {
    fn from(r: &'a School) -> Self {
        EntityRef::School(r)
    }
}

impl<'a> From<&'a Student> for EntityRef<'a> {
    fn from(r: &'a Student) -> Self {
        EntityRef::Student(r)
    }
}

impl<'a> From<&'a Course> for EntityRef<'a> {
    fn from(r: &'a Course) -> Self {
        EntityRef::Course(r)
    }
}

impl<'a> From<&'a Calendar> for EntityRef<'a> {
    fn from(r: &'a Calendar) -> Self {
        EntityRef::Calendar(r)
    }
}

impl<'a> From<&'a Grade> for EntityRef<'a> {
    fn from(r: &'a Grade) -> Self {
        EntityRef::Grade(r)
    }
}

impl<'a> From<&'a Attendance> for EntityRef<'a> {
    fn from(r: &'a Attendance) -> Self {
        EntityRef::Attendance(r)
    }
}

impl<'a> From<&'a Behavior> for EntityRef<'a> {
    fn from(r: &'a Behavior) -> Self {
        EntityRef::Behavior(r)
    }
}

impl<'a> From<&'a Referral> for EntityRef<'a> {
    fn from(r: &'a Referral) -> Self {
        EntityRef::Referral(r)
    }
}

impl<'a> From<&'a Bookmark> for EntityRef<'a> {
    fn from(r: &'a Bookmark) -> Self {
        EntityRef::Bookmark(r)
    }
}
