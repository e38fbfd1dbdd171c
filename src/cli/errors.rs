//! CLI-specific error types
//!
//! All CLI errors terminate the command with a non-zero exit.

use std::fmt;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Dataset file could not be loaded
    DataError,
    /// Requested record does not exist
    NotFound,
    /// Rendering failed (relationship or view error)
    RenderError,
    /// Integrity check found violations
    IntegrityFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::DataError => "SIS_CLI_DATA_ERROR",
            Self::NotFound => "SIS_CLI_NOT_FOUND",
            Self::RenderError => "SIS_CLI_RENDER_ERROR",
            Self::IntegrityFailed => "SIS_CLI_INTEGRITY_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Dataset load error
    pub fn data_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::DataError, msg)
    }

    /// Record not found
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::NotFound, msg)
    }

    /// Render error
    pub fn render_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::RenderError, msg)
    }

    /// Integrity violations found
    pub fn integrity_failed(count: usize) -> Self {
        Self::new(
            CliErrorCode::IntegrityFailed,
            format!("{} integrity violation(s) found", count),
        )
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
