//! Dataset error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Errors raised while loading or checking a dataset.
///
/// All of these are fatal to the invoking command; the serialization
/// layer never retries or degrades.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Dataset file could not be read
    #[error("failed to read dataset file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset file is not valid JSON for the expected shape
    #[error("malformed dataset file '{path}': {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
