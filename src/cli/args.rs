//! CLI argument definitions using clap
//!
//! Commands:
//! - sisdata check --data <path>
//! - sisdata show --data <path>
//! - sisdata render --data <path> --kind <tag> --id <n> [--child <tag>]... [--view <name>] [--pretty]

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::model::EntityKind;

/// sisdata - Serialization layer for a student-information system
#[derive(Parser, Debug)]
#[command(name = "sisdata")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a dataset file for broken references
    Check {
        /// Path to the dataset JSON file
        #[arg(long)]
        data: PathBuf,
    },

    /// Show per-kind record counts for a dataset file
    Show {
        /// Path to the dataset JSON file
        #[arg(long)]
        data: PathBuf,
    },

    /// Render one record as JSON, optionally with nested child sets
    Render {
        /// Path to the dataset JSON file
        #[arg(long)]
        data: PathBuf,

        /// Entity kind of the record (e.g. "student")
        #[arg(long)]
        kind: EntityKind,

        /// Primary key of the record
        #[arg(long)]
        id: i64,

        /// Child kinds to nest (repeatable, rendered in order)
        #[arg(long = "child")]
        children: Vec<EntityKind>,

        /// Student report view instead of the leaf/composite shape
        #[arg(long, conflicts_with = "children")]
        view: Option<ViewName>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

/// Student report views selectable from the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewName {
    Summary,
    Grades,
    Transcript,
}

// Lets clap parse and list entity-kind arguments by their tags.
impl ValueEnum for EntityKind {
    fn value_variants<'a>() -> &'a [Self] {
        &crate::model::ALL_KINDS
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.tag()))
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
