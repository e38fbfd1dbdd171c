//! Primary record types
//!
//! Plain serde-derived records supplied by the persistence collaborator.
//! Foreign-key fields hold the referenced record's id, never a nested
//! object. `program` and `user` reference rows managed outside this
//! crate and are carried as bare identifiers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Record identifier. The source system uses integer primary keys.
pub type EntityId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub id: EntityId,
    pub code: String,
    pub city: String,
    pub state: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: EntityId,
    /// District this school belongs to.
    pub district: EntityId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: EntityId,
    /// School the student currently attends.
    pub current_school: EntityId,
    /// Program the student is currently enrolled in (external row).
    pub current_program: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub gender: String,
    pub birth_date: NaiveDate,
    pub state_id: i64,
    pub grade_year: i32,
    pub reason_in_program: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: EntityId,
    pub school: EntityId,
    pub name: String,
    pub code: String,
    pub subject: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calendar {
    pub id: EntityId,
    pub year: i32,
    pub term: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: EntityId,
    pub student: EntityId,
    pub course: EntityId,
    pub calendar: EntityId,
    pub program: EntityId,
    pub entry_datetime: DateTime<Utc>,
    pub period: i32,
    /// Letter or numeric grade as recorded by the school.
    pub grade: String,
    /// Whether this row is the final grade for the term.
    pub term_final_value: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: EntityId,
    pub student: EntityId,
    pub school: EntityId,
    pub calendar: EntityId,
    pub program: EntityId,
    pub entry_datetime: DateTime<Utc>,
    pub total_unexabs: i32,
    pub total_exabs: i32,
    pub total_tardies: i32,
    pub avg_daily_attendance: f64,
    pub term_final_value: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Behavior {
    pub id: EntityId,
    pub student: EntityId,
    pub school: EntityId,
    pub calendar: EntityId,
    pub program: EntityId,
    pub period: i32,
    pub incident_datetime: DateTime<Utc>,
    pub context: String,
    pub incident_type_program: String,
    pub incident_result_program: String,
    pub incident_type_school: String,
    pub incident_result_school: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Referral {
    pub id: EntityId,
    /// Staff user who made the referral (external row).
    pub user: EntityId,
    pub student: EntityId,
    pub program: EntityId,
    #[serde(rename = "type")]
    pub referral_type: String,
    pub date_given: NaiveDate,
    pub reference_name: String,
    pub reference_phone: String,
    pub reference_address: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: EntityId,
    pub user: EntityId,
    pub url: String,
    pub created: DateTime<Utc>,
    /// Request payload captured when the bookmark was saved. Arbitrary
    /// shape, stored verbatim.
    pub json_request_data: Value,
}
