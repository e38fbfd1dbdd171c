//! CLI module for sisdata
//!
//! Provides the command-line interface for:
//! - check: dataset referential-integrity report
//! - show: per-kind record counts
//! - render: leaf, composite, or student-view JSON output

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ViewName};
pub use commands::{check, render, run, run_command, show};
pub use errors::{CliError, CliErrorCode, CliResult};
