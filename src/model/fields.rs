//! Declared field metadata per entity kind
//!
//! One static table per kind listing the serialization fields in output
//! order, with each field marked as a plain value or a reference to
//! another row. Leaf serializers emit exactly these names, and the
//! relationship table is cross-checked against these entries, so the
//! foreign-key wiring is declared here once rather than discovered by
//! inspecting live records per call.
//!
//! Reference targets are lowercase tags. `"program"` and `"user"` point
//! at rows managed outside this crate; they serialize as bare ids and
//! are never valid relationship parents.

use super::kind::EntityKind;

/// Role of a declared field in serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// Plain value emitted as-is.
    Value,
    /// Reference to another row, emitted as the bare id. The target is
    /// the referenced kind's tag, or `"program"`/`"user"` for external
    /// rows.
    Reference(&'static str),
}

/// A declared serialization field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub role: FieldRole,
}

impl FieldSpec {
    const fn value(name: &'static str) -> Self {
        Self {
            name,
            role: FieldRole::Value,
        }
    }

    const fn reference(name: &'static str, target: &'static str) -> Self {
        Self {
            name,
            role: FieldRole::Reference(target),
        }
    }

    /// Whether this field is a reference to the given target tag.
    pub fn references(&self, target: &str) -> bool {
        matches!(self.role, FieldRole::Reference(t) if t == target)
    }
}

const DISTRICT_FIELDS: &[FieldSpec] = &[
    FieldSpec::value("id"),
    FieldSpec::value("code"),
    FieldSpec::value("city"),
    FieldSpec::value("state"),
    FieldSpec::value("name"),
];

const SCHOOL_FIELDS: &[FieldSpec] = &[
    FieldSpec::value("id"),
    FieldSpec::reference("district", "district"),
    FieldSpec::value("name"),
];

const STUDENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::value("id"),
    FieldSpec::reference("current_school", "school"),
    FieldSpec::reference("current_program", "program"),
    FieldSpec::value("first_name"),
    FieldSpec::value("last_name"),
    FieldSpec::value("middle_name"),
    FieldSpec::value("gender"),
    FieldSpec::value("birth_date"),
    FieldSpec::value("state_id"),
    FieldSpec::value("grade_year"),
    FieldSpec::value("reason_in_program"),
];

const COURSE_FIELDS: &[FieldSpec] = &[
    FieldSpec::value("id"),
    FieldSpec::reference("school", "school"),
    FieldSpec::value("name"),
    FieldSpec::value("code"),
    FieldSpec::value("subject"),
];

const CALENDAR_FIELDS: &[FieldSpec] = &[
    FieldSpec::value("id"),
    FieldSpec::value("year"),
    FieldSpec::value("term"),
];

const GRADE_FIELDS: &[FieldSpec] = &[
    FieldSpec::value("id"),
    FieldSpec::reference("student", "student"),
    FieldSpec::reference("course", "course"),
    FieldSpec::reference("calendar", "calendar"),
    FieldSpec::reference("program", "program"),
    FieldSpec::value("entry_datetime"),
    FieldSpec::value("period"),
    FieldSpec::value("grade"),
    FieldSpec::value("term_final_value"),
];

const ATTENDANCE_FIELDS: &[FieldSpec] = &[
    FieldSpec::value("id"),
    FieldSpec::reference("student", "student"),
    FieldSpec::reference("school", "school"),
    FieldSpec::reference("calendar", "calendar"),
    FieldSpec::reference("program", "program"),
    FieldSpec::value("entry_datetime"),
    FieldSpec::value("total_unexabs"),
    FieldSpec::value("total_exabs"),
    FieldSpec::value("total_tardies"),
    FieldSpec::value("avg_daily_attendance"),
    FieldSpec::value("term_final_value"),
];

const BEHAVIOR_FIELDS: &[FieldSpec] = &[
    FieldSpec::value("id"),
    FieldSpec::reference("student", "student"),
    FieldSpec::reference("school", "school"),
    FieldSpec::reference("calendar", "calendar"),
    FieldSpec::reference("program", "program"),
    FieldSpec::value("period"),
    FieldSpec::value("incident_datetime"),
    FieldSpec::value("context"),
    FieldSpec::value("incident_type_program"),
    FieldSpec::value("incident_result_program"),
    FieldSpec::value("incident_type_school"),
    FieldSpec::value("incident_result_school"),
];

const REFERRAL_FIELDS: &[FieldSpec] = &[
    FieldSpec::value("id"),
    FieldSpec::reference("user", "user"),
    FieldSpec::reference("student", "student"),
    FieldSpec::reference("program", "program"),
    FieldSpec::value("type"),
    FieldSpec::value("date_given"),
    FieldSpec::value("reference_name"),
    FieldSpec::value("reference_phone"),
    FieldSpec::value("reference_address"),
    FieldSpec::value("reason"),
];

const BOOKMARK_FIELDS: &[FieldSpec] = &[
    FieldSpec::value("id"),
    FieldSpec::reference("user", "user"),
    FieldSpec::value("url"),
    FieldSpec::value("created"),
    FieldSpec::value("json_request_data"),
];

/// Declared serialization fields for a kind, in output order.
///
/// The `notes` list is not declared here: every kind carries it and the
/// leaf serializers append it unconditionally.
pub fn declared_fields(kind: EntityKind) -> &'static [FieldSpec] {
    match kind {
        EntityKind::District => DISTRICT_FIELDS,
        EntityKind::School => SCHOOL_FIELDS,
        EntityKind::Student => STUDENT_FIELDS,
        EntityKind::Course => COURSE_FIELDS,
        EntityKind::Calendar => CALENDAR_FIELDS,
        EntityKind::Grade => GRADE_FIELDS,
        EntityKind::Attendance => ATTENDANCE_FIELDS,
        EntityKind::Behavior => BEHAVIOR_FIELDS,
        EntityKind::Referral => REFERRAL_FIELDS,
        EntityKind::Bookmark => BOOKMARK_FIELDS,
    }
}

/// Finds the field on `child` that is a reference to `parent` and is
/// named with the parent's tag.
///
/// Returns `None` when no field satisfies both conditions. Callers must
/// treat that as a hard "no relationship" error; there is no fallback
/// to the first reference field encountered.
pub fn relationship_field(child: EntityKind, parent: EntityKind) -> Option<&'static FieldSpec> {
    declared_fields(child)
        .iter()
        .find(|f| f.name == parent.tag() && f.references(parent.tag()))
}
