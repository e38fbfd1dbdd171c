//! CLI command implementations
//!
//! Each command loads the dataset file, runs the requested operation,
//! and writes JSON to stdout. Failures map to coded CLI errors; the
//! entry point prints them to stderr.

use std::path::Path;

use serde_json::{json, Value};

use crate::dataset::{self, Dataset};
use crate::model::{EntityId, EntityKind, EntityRef, Student, ALL_KINDS};
use crate::serializer::{self, ChildSetSerializer};

use super::args::{Cli, Command, ViewName};
use super::errors::{CliError, CliResult};

/// Parses arguments and dispatches to the requested command.
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}

/// Dispatches a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Check { data } => check(&data),
        Command::Show { data } => show(&data),
        Command::Render {
            data,
            kind,
            id,
            children,
            view,
            pretty,
        } => {
            let output = render(&data, kind, id, &children, view)?;
            print_value(&output, pretty);
            Ok(())
        }
    }
}

/// `check`: load the dataset and report every broken reference.
pub fn check(data: &Path) -> CliResult<()> {
    let ds = load_dataset(data)?;
    let violations = dataset::check(&ds);

    if violations.is_empty() {
        println!("ok: {} collections consistent", ALL_KINDS.len());
        return Ok(());
    }

    for violation in &violations {
        eprintln!("{}", violation);
    }
    Err(CliError::integrity_failed(violations.len()))
}

/// `show`: per-kind record counts plus the note count.
pub fn show(data: &Path) -> CliResult<()> {
    let ds = load_dataset(data)?;

    let mut counts = serde_json::Map::new();
    for kind in ALL_KINDS {
        counts.insert(kind.tag().to_string(), json!(ds.count(kind)));
    }
    counts.insert("note".to_string(), json!(ds.notes.len()));

    print_value(&Value::Object(counts), true);
    Ok(())
}

/// `render`: one record as JSON — leaf, composite, or student view.
pub fn render(
    data: &Path,
    kind: EntityKind,
    id: EntityId,
    children: &[EntityKind],
    view: Option<ViewName>,
) -> CliResult<Value> {
    let ds = load_dataset(data)?;

    if let Some(view) = view {
        return render_view(&ds, kind, id, view);
    }

    let parent = find_record(&ds, kind, id)?;
    ChildSetSerializer::new(parent, children.iter().copied())
        .render(&ds)
        .map_err(|e| CliError::render_error(e.to_string()))
}

fn render_view(ds: &Dataset, kind: EntityKind, id: EntityId, view: ViewName) -> CliResult<Value> {
    if kind != EntityKind::Student {
        return Err(CliError::render_error(format!(
            "views apply to students only, got kind '{}'",
            kind
        )));
    }
    let student = find_student(ds, id)?;

    let result = match view {
        ViewName::Summary => serializer::student_summary(student, ds),
        ViewName::Grades => serializer::student_grades(student, ds),
        ViewName::Transcript => serializer::student_transcript(student, ds),
    };
    result.map_err(|e| CliError::render_error(e.to_string()))
}

fn load_dataset(data: &Path) -> CliResult<Dataset> {
    dataset::load(data).map_err(|e| CliError::data_error(e.to_string()))
}

fn find_record<'a>(ds: &'a Dataset, kind: EntityKind, id: EntityId) -> CliResult<EntityRef<'a>> {
    ds.find(kind, id)
        .ok_or_else(|| CliError::not_found(format!("{} {} not in dataset", kind, id)))
}

fn find_student(ds: &Dataset, id: EntityId) -> CliResult<&Student> {
    ds.students
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| CliError::not_found(format!("student {} not in dataset", id)))
}

fn print_value(value: &Value, pretty: bool) {
    if pretty {
        println!("{:#}", value);
    } else {
        println!("{}", value);
    }
}
