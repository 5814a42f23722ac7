//! Project graph construction and validation.
//!
//! Events are derived from task endpoints and interned into dense indices;
//! tasks become duration-weighted edges between them. Building fails on any
//! input the scheduling passes cannot handle: empty input, empty or
//! duplicate task names, negative durations, self-loops, and precedence
//! cycles. The passes themselves assume a validated graph and do not
//! re-check.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::interner::{EventId, EventInterner};
use crate::models::Task;

/// Errors reported when a raw task list cannot form a valid project graph.
///
/// All of these are user-correctable; each carries the offending name(s) or
/// event(s) so it can be displayed or logged usefully.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("task list is empty")]
    EmptyTaskList,
    #[error("task at row {0} has an empty name")]
    EmptyTaskName(usize),
    #[error("duplicate task name: {0:?}")]
    DuplicateTaskName(String),
    #[error("task {name:?} has negative duration {duration}")]
    NegativeDuration { name: String, duration: i64 },
    #[error("task {name:?} starts and ends at event {event:?}")]
    SelfLoop { name: String, event: String },
    /// The precedence graph has a directed cycle. Carries the identifiers of
    /// the events that could not be topologically ordered, sorted for
    /// deterministic output.
    #[error("precedence cycle through events {0:?}")]
    Cycle(Vec<String>),
}

/// Validated project network: events as nodes, tasks as weighted edges.
///
/// Multiple source events (no incoming tasks) and multiple sink events (no
/// outgoing tasks) are legal. The graph is guaranteed acyclic and carries a
/// precomputed topological order over its events.
#[derive(Debug, Clone)]
pub struct ProjectGraph {
    events: EventInterner,
    tasks: Vec<Task>,
    /// Interned (start, end) pair per task, parallel to `tasks`.
    endpoints: Vec<(EventId, EventId)>,
    /// Task indices ending at each event.
    incoming: Vec<Vec<usize>>,
    /// Task indices starting at each event.
    outgoing: Vec<Vec<usize>>,
    topo_order: Vec<EventId>,
}

impl ProjectGraph {
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Tasks in input order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, index: usize) -> &Task {
        &self.tasks[index]
    }

    /// Interned (start, end) endpoints of the task at `index`.
    pub fn endpoints(&self, index: usize) -> (EventId, EventId) {
        self.endpoints[index]
    }

    /// Indices of tasks ending at `event`.
    pub fn incoming(&self, event: EventId) -> &[usize] {
        &self.incoming[event as usize]
    }

    /// Indices of tasks starting at `event`.
    pub fn outgoing(&self, event: EventId) -> &[usize] {
        &self.outgoing[event as usize]
    }

    /// Events ordered so that every task's start event comes before its end
    /// event.
    pub fn topo_order(&self) -> &[EventId] {
        &self.topo_order
    }

    /// Original identifier of an interned event.
    pub fn event_name(&self, event: EventId) -> &str {
        self.events.resolve(event).unwrap_or("")
    }

    /// An event with no outgoing tasks is a sink (project terminal).
    pub fn is_sink(&self, event: EventId) -> bool {
        self.outgoing(event).is_empty()
    }

    /// An event with no incoming tasks is a source.
    pub fn is_source(&self, event: EventId) -> bool {
        self.incoming(event).is_empty()
    }
}

/// Validate a task list and build the project graph.
///
/// The input is not mutated; the graph owns its own copy of the tasks.
pub fn build(tasks: &[Task]) -> Result<ProjectGraph, ValidationError> {
    if tasks.is_empty() {
        return Err(ValidationError::EmptyTaskList);
    }

    let mut seen_names: FxHashSet<&str> =
        FxHashSet::with_capacity_and_hasher(tasks.len(), Default::default());
    for (row, task) in tasks.iter().enumerate() {
        if task.name.is_empty() {
            return Err(ValidationError::EmptyTaskName(row));
        }
        if !seen_names.insert(task.name.as_str()) {
            return Err(ValidationError::DuplicateTaskName(task.name.clone()));
        }
        if task.duration < 0 {
            return Err(ValidationError::NegativeDuration {
                name: task.name.clone(),
                duration: task.duration,
            });
        }
        if task.start_event == task.end_event {
            return Err(ValidationError::SelfLoop {
                name: task.name.clone(),
                event: task.start_event.clone(),
            });
        }
    }

    // Events are exactly the union of task endpoints, interned in
    // first-appearance order.
    let mut events = EventInterner::with_capacity(tasks.len() * 2);
    let endpoints: Vec<(EventId, EventId)> = tasks
        .iter()
        .map(|t| (events.intern(&t.start_event), events.intern(&t.end_event)))
        .collect();

    let event_count = events.len();
    let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); event_count];
    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); event_count];
    for (index, &(start, end)) in endpoints.iter().enumerate() {
        outgoing[start as usize].push(index);
        incoming[end as usize].push(index);
    }

    let topo_order = topological_order(&events, &endpoints, &incoming, &outgoing)?;

    Ok(ProjectGraph {
        events,
        tasks: tasks.to_vec(),
        endpoints,
        incoming,
        outgoing,
        topo_order,
    })
}

/// Topological sort of events using Kahn's algorithm.
///
/// Failure to order every event means the precedence graph has a cycle; the
/// error names the events left with unresolved predecessors.
fn topological_order(
    events: &EventInterner,
    endpoints: &[(EventId, EventId)],
    incoming: &[Vec<usize>],
    outgoing: &[Vec<usize>],
) -> Result<Vec<EventId>, ValidationError> {
    let event_count = incoming.len();
    let mut in_degree: Vec<usize> = incoming.iter().map(Vec::len).collect();

    let mut queue: VecDeque<EventId> = (0..event_count as EventId)
        .filter(|&event| in_degree[event as usize] == 0)
        .collect();
    let mut order: Vec<EventId> = Vec::with_capacity(event_count);

    while let Some(event) = queue.pop_front() {
        order.push(event);
        for &task_index in &outgoing[event as usize] {
            let (_, end) = endpoints[task_index];
            in_degree[end as usize] -= 1;
            if in_degree[end as usize] == 0 {
                queue.push_back(end);
            }
        }
    }

    if order.len() != event_count {
        let mut unresolved: Vec<String> = (0..event_count as EventId)
            .filter(|&event| in_degree[event as usize] > 0)
            .filter_map(|event| events.resolve(event).map(str::to_string))
            .collect();
        unresolved.sort();
        return Err(ValidationError::Cycle(unresolved));
    }

    Ok(order)
}
