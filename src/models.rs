//! Core data types for CPM scheduling.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A unit of work with a duration, connecting its start event to its end
/// event. Precedence between tasks is expressed purely through shared events
/// (activity-on-arrow).
///
/// The shape round-trips losslessly through a `Name, Duration, Start, End`
/// table. Durations are whole time units; negative values are rejected at
/// graph construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique, non-empty task name.
    pub name: String,
    /// Duration in whole time units.
    pub duration: i64,
    /// Identifier of the event at which the task starts.
    pub start_event: String,
    /// Identifier of the event at which the task ends.
    pub end_event: String,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        duration: i64,
        start_event: impl Into<String>,
        end_event: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            duration,
            start_event: start_event.into(),
            end_event: end_event.into(),
        }
    }
}

/// Computed schedule for one task list.
///
/// Event keys are the caller's own identifiers, exactly as they appeared in
/// `start_event`/`end_event`; no internal renaming leaks out, so a renderer
/// can join directly. The value owns all its data and holds no reference
/// back to the graph it was computed from. `BTreeMap` keeps iteration and
/// serialization order deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Earliest event time per event.
    pub earliest_event_times: BTreeMap<String, i64>,
    /// Latest event time per event.
    pub latest_event_times: BTreeMap<String, i64>,
    /// Slack (latest minus earliest) per event; never negative.
    pub slack: BTreeMap<String, i64>,
    /// Names of tasks on a zero-slack path, in input order.
    pub critical_tasks: Vec<String>,
}

impl ScheduleResult {
    /// Project completion time: the largest earliest event time.
    pub fn completion_time(&self) -> i64 {
        self.earliest_event_times.values().copied().max().unwrap_or(0)
    }

    /// Whether the named task lies on a critical path.
    pub fn is_critical(&self, task_name: &str) -> bool {
        self.critical_tasks.iter().any(|name| name == task_name)
    }
}
