//! sisdata - Serialization layer for a student-information system
//!
//! Maps typed student-records (districts, schools, students, courses,
//! calendars, grades, attendance, behavior incidents, referrals,
//! bookmarks, notes) to JSON values: flat leaf mappings per record,
//! and composite mappings nesting related child sets under a parent.

pub mod cli;
pub mod dataset;
pub mod model;
pub mod serializer;
