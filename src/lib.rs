//! Critical Path Method scheduling core.
//!
//! Takes a flat list of tasks whose precedence is expressed through shared
//! start/end events (activity-on-arrow), validates it, and computes earliest
//! and latest event times, per-event slack, and the set of tasks on a
//! critical (zero-slack) path.
//!
//! The computation is a pure, synchronous function of its input: each call
//! builds its own graph, runs the forward and backward passes, classifies
//! tasks, and returns an owned [`ScheduleResult`]. Nothing is shared across
//! calls, so concurrent invocations on independent task lists are safe by
//! construction. Interactive callers should recompute from a fresh snapshot
//! of the task list on every edit and discard the previous result.

pub mod backward;
pub mod classify;
mod config;
pub mod forward;
pub mod graph;
mod interner;
pub mod logging;
mod models;
pub mod precedence;
pub mod records;

use std::collections::BTreeMap;

use thiserror::Error;

pub use classify::InvariantViolation;
pub use config::CpmConfig;
pub use graph::{ProjectGraph, ValidationError};
pub use interner::EventId;
pub use models::{ScheduleResult, Task};
pub use precedence::{translate, ActivitySpec, PrecedenceError, PrecedenceTranslation};
pub use records::{tasks_from_records, Import, ImportError, RawRecord, RowPolicy, SkippedRow};

/// Errors from [`compute_schedule`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The input task list is invalid; user-correctable.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The passes produced inconsistent output; a defect, not bad input.
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

/// Compute the CPM schedule for a task list.
///
/// Validation failures short-circuit the whole pipeline; no partial result
/// is ever returned for invalid input.
pub fn compute_schedule(tasks: &[Task]) -> Result<ScheduleResult, ScheduleError> {
    compute_schedule_with_config(tasks, &CpmConfig::default())
}

/// Compute the CPM schedule with explicit configuration.
pub fn compute_schedule_with_config(
    tasks: &[Task],
    config: &CpmConfig,
) -> Result<ScheduleResult, ScheduleError> {
    let graph = graph::build(tasks)?;
    log_stages!(
        config.verbosity,
        "graph built: {} tasks, {} events",
        graph.task_count(),
        graph.event_count()
    );

    let eet = forward::forward_pass(&graph, config);
    let let_times = backward::backward_pass(&graph, &eet, config);
    let (slack, critical_tasks) = classify::classify(&graph, &eet, &let_times, config)?;
    log_stages!(
        config.verbosity,
        "classified {} critical of {} tasks",
        critical_tasks.len(),
        graph.task_count()
    );

    // Materialize caller-facing maps keyed by the original identifiers.
    let mut earliest_event_times = BTreeMap::new();
    let mut latest_event_times = BTreeMap::new();
    let mut slack_by_event = BTreeMap::new();
    for event in 0..graph.event_count() {
        let name = graph.event_name(event as EventId).to_string();
        earliest_event_times.insert(name.clone(), eet[event]);
        latest_event_times.insert(name.clone(), let_times[event]);
        slack_by_event.insert(name, slack[event]);
    }

    Ok(ScheduleResult {
        earliest_event_times,
        latest_event_times,
        slack: slack_by_event,
        critical_tasks,
    })
}
