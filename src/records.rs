//! Explicit handling of loosely-typed task table rows.
//!
//! Task sources such as table editors hand over rows of strings. Dropping
//! unparseable rows silently hides data loss from the user, so the policy is
//! explicit here: either the whole import is rejected at the first bad row,
//! or bad rows are skipped and reported back to the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Task;

/// One row as read from a `Name, Duration, Start, End` table, before any
/// type checking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub name: String,
    pub duration: String,
    pub start_event: String,
    pub end_event: String,
}

impl RawRecord {
    pub fn new(
        name: impl Into<String>,
        duration: impl Into<String>,
        start_event: impl Into<String>,
        end_event: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            duration: duration.into(),
            start_event: start_event.into(),
            end_event: end_event.into(),
        }
    }
}

/// What to do with a malformed row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowPolicy {
    /// Reject the whole import at the first malformed row.
    RejectImport,
    /// Skip malformed rows and report them in the import result.
    SkipRow,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },
}

/// A row skipped under [`RowPolicy::SkipRow`], with the reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRow {
    pub row: usize,
    pub reason: String,
}

/// Outcome of an import: well-typed tasks plus any skipped rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Import {
    pub tasks: Vec<Task>,
    pub skipped: Vec<SkippedRow>,
}

/// Convert raw table rows into tasks under the given policy.
///
/// Only field-level typing is checked here (non-empty name and events,
/// integer duration); graph-level validation such as duplicate names and
/// cycles stays with [`crate::graph::build`].
pub fn tasks_from_records(records: &[RawRecord], policy: RowPolicy) -> Result<Import, ImportError> {
    let mut import = Import::default();
    for (row, record) in records.iter().enumerate() {
        match parse_record(record) {
            Ok(task) => import.tasks.push(task),
            Err(reason) => match policy {
                RowPolicy::RejectImport => {
                    return Err(ImportError::MalformedRow { row, reason })
                }
                RowPolicy::SkipRow => import.skipped.push(SkippedRow { row, reason }),
            },
        }
    }
    Ok(import)
}

fn parse_record(record: &RawRecord) -> Result<Task, String> {
    let name = record.name.trim();
    if name.is_empty() {
        return Err("empty task name".to_string());
    }
    let duration: i64 = record
        .duration
        .trim()
        .parse()
        .map_err(|_| format!("duration {:?} is not an integer", record.duration))?;
    let start_event = record.start_event.trim();
    let end_event = record.end_event.trim();
    if start_event.is_empty() || end_event.is_empty() {
        return Err("missing start or end event".to_string());
    }
    Ok(Task::new(name, duration, start_event, end_event))
}
