//! Dataset subsystem
//!
//! The record source the serializers read from:
//! - `Dataset`: in-memory collections with kind-indexed iteration and
//!   note lookup
//! - loader: JSON file in, dataset out, with distinct I/O and parse
//!   errors
//! - integrity: referential checks over internal foreign keys and note
//!   attachments

mod errors;
mod integrity;
mod loader;
mod store;

pub use errors::{DatasetError, DatasetResult};
pub use integrity::{check, Violation};
pub use loader::{load, save};
pub use store::Dataset;
