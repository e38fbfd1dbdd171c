//! Statically declared parent/child relationships
//!
//! Each entry names the child's foreign-key field (always the parent's
//! lowercase tag) and carries an accessor that reads that field off a
//! record. The table is fixed at compile time; looking up a pair with
//! no entry is a hard `NoRelationship` error, never a fallback to some
//! other field.
//!
//! A test cross-checks this table against the declared field metadata
//! in `model`, so an entry cannot name a field the child does not
//! declare as a reference to the parent.

use crate::model::{EntityId, EntityKind, EntityRef};

use super::errors::{SerializerError, SerializerResult};

/// One declared many-to-one relationship: many `child` records per
/// `parent` record.
#[derive(Debug)]
pub struct Relation {
    pub parent: EntityKind,
    pub child: EntityKind,
    /// Name of the foreign-key field on the child.
    pub field: &'static str,
    accessor: fn(EntityRef<'_>) -> Option<EntityId>,
}

impl Relation {
    /// Whether `child` points at the parent record with this id.
    ///
    /// Records of the wrong kind never match.
    pub fn points_at(&self, child: EntityRef<'_>, parent_id: EntityId) -> bool {
        (self.accessor)(child) == Some(parent_id)
    }
}

fn school_district(e: EntityRef<'_>) -> Option<EntityId> {
    match e {
        EntityRef::School(r) => Some(r.district),
        _ => None,
    }
}

fn course_school(e: EntityRef<'_>) -> Option<EntityId> {
    match e {
        EntityRef::Course(r) => Some(r.school),
        _ => None,
    }
}

fn grade_student(e: EntityRef<'_>) -> Option<EntityId> {
    match e {
        EntityRef::Grade(r) => Some(r.student),
        _ => None,
    }
}

fn grade_course(e: EntityRef<'_>) -> Option<EntityId> {
    match e {
        EntityRef::Grade(r) => Some(r.course),
        _ => None,
    }
}

fn grade_calendar(e: EntityRef<'_>) -> Option<EntityId> {
    match e {
        EntityRef::Grade(r) => Some(r.calendar),
        _ => None,
    }
}

fn attendance_student(e: EntityRef<'_>) -> Option<EntityId> {
    match e {
        EntityRef::Attendance(r) => Some(r.student),
        _ => None,
    }
}

fn attendance_school(e: EntityRef<'_>) -> Option<EntityId> {
    match e {
        EntityRef::Attendance(r) => Some(r.school),
        _ => None,
    }
}

fn attendance_calendar(e: EntityRef<'_>) -> Option<EntityId> {
    match e {
        EntityRef::Attendance(r) => Some(r.calendar),
        _ => None,
    }
}

fn behavior_student(e: EntityRef<'_>) -> Option<EntityId> {
    match e {
        EntityRef::Behavior(r) => Some(r.student),
        _ => None,
    }
}

fn behavior_school(e: EntityRef<'_>) -> Option<EntityId> {
    match e {
        EntityRef::Behavior(r) => Some(r.school),
        _ => None,
    }
}

fn behavior_calendar(e: EntityRef<'_>) -> Option<EntityId> {
    match e {
        EntityRef::Behavior(r) => Some(r.calendar),
        _ => None,
    }
}

fn referral_student(e: EntityRef<'_>) -> Option<EntityId> {
    match e {
        EntityRef::Referral(r) => Some(r.student),
        _ => None,
    }
}

/// Every declared relationship in the data model.
pub const RELATIONS: &[Relation] = &[
    Relation {
        parent: EntityKind::District,
        child: EntityKind::School,
        field: "district",
        accessor: school_district,
    },
    Relation {
        parent: EntityKind::School,
        child: EntityKind::Course,
        field: "school",
        accessor: course_school,
    },
    Relation {
        parent: EntityKind::School,
        child: EntityKind::Attendance,
        field: "school",
        accessor: attendance_school,
    },
    Relation {
        parent: EntityKind::School,
        child: EntityKind::Behavior,
        field: "school",
        accessor: behavior_school,
    },
    Relation {
        parent: EntityKind::Student,
        child: EntityKind::Grade,
        field: "student",
        accessor: grade_student,
    },
    Relation {
        parent: EntityKind::Student,
        child: EntityKind::Attendance,
        field: "student",
        accessor: attendance_student,
    },
    Relation {
        parent: EntityKind::Student,
        child: EntityKind::Behavior,
        field: "student",
        accessor: behavior_student,
    },
    Relation {
        parent: EntityKind::Student,
        child: EntityKind::Referral,
        field: "student",
        accessor: referral_student,
    },
    Relation {
        parent: EntityKind::Course,
        child: EntityKind::Grade,
        field: "course",
        accessor: grade_course,
    },
    Relation {
        parent: EntityKind::Calendar,
        child: EntityKind::Grade,
        field: "calendar",
        accessor: grade_calendar,
    },
    Relation {
        parent: EntityKind::Calendar,
        child: EntityKind::Attendance,
        field: "calendar",
        accessor: attendance_calendar,
    },
    Relation {
        parent: EntityKind::Calendar,
        child: EntityKind::Behavior,
        field: "calendar",
        accessor: behavior_calendar,
    },
];

/// Looks up the declared relationship for a (parent, child) pair.
pub fn relation(parent: EntityKind, child: EntityKind) -> SerializerResult<&'static Relation> {
    RELATIONS
        .iter()
        .find(|r| r.parent == parent && r.child == child)
        .ok_or(SerializerError::NoRelationship { parent, child })
}
