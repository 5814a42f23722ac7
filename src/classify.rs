//! Slack derivation and critical task classification.

use thiserror::Error;

use crate::config::CpmConfig;
use crate::graph::ProjectGraph;
use crate::interner::EventId;
use crate::log_trace;

/// Defects in scheduler output.
///
/// These indicate a bug in the passes, not bad input. They abort the
/// computation instead of being clamped; a caller can only report them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("negative slack {slack} at event {event:?} (EET {eet} > LET {let_time})")]
    NegativeSlack {
        event: String,
        eet: i64,
        let_time: i64,
        slack: i64,
    },
    #[error(
        "event time tables are incomplete: EET covers {eet_len}, LET covers {let_len}, graph has {expected} events"
    )]
    IncompleteCoverage {
        eet_len: usize,
        let_len: usize,
        expected: usize,
    },
}

/// Derive per-event slack and the set of critical tasks.
///
/// A task is critical when all three hold: its start event has zero slack,
/// its end event has zero slack, and its duration exactly spans the gap
/// between the two earliest times. The third condition is what keeps
/// non-tight tasks that merely touch a zero-slack event off the critical
/// set. Returned names are in input order.
pub fn classify(
    graph: &ProjectGraph,
    eet: &[i64],
    let_times: &[i64],
    config: &CpmConfig,
) -> Result<(Vec<i64>, Vec<String>), InvariantViolation> {
    let event_count = graph.event_count();
    if eet.len() != event_count || let_times.len() != event_count {
        return Err(InvariantViolation::IncompleteCoverage {
            eet_len: eet.len(),
            let_len: let_times.len(),
            expected: event_count,
        });
    }

    let mut slack = vec![0i64; event_count];
    for event in 0..event_count {
        let gap = let_times[event] - eet[event];
        if gap < 0 {
            return Err(InvariantViolation::NegativeSlack {
                event: graph.event_name(event as EventId).to_string(),
                eet: eet[event],
                let_time: let_times[event],
                slack: gap,
            });
        }
        slack[event] = gap;
    }

    let mut critical = Vec::new();
    for (index, task) in graph.tasks().iter().enumerate() {
        let (start, end) = graph.endpoints(index);
        let tight = eet[start as usize] + task.duration == eet[end as usize];
        if slack[start as usize] == 0 && slack[end as usize] == 0 && tight {
            critical.push(task.name.clone());
        } else {
            log_trace!(
                config.verbosity,
                "task {} off critical path (slack {}/{}, tight: {})",
                task.name,
                slack[start as usize],
                slack[end as usize],
                tight
            );
        }
    }

    Ok((slack, critical))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backward::backward_pass;
    use crate::forward::forward_pass;
    use crate::graph::build;
    use crate::models::Task;

    fn classify_tasks(tasks: &[Task]) -> (Vec<i64>, Vec<String>) {
        let config = CpmConfig::default();
        let graph = build(tasks).unwrap();
        let eet = forward_pass(&graph, &config);
        let let_times = backward_pass(&graph, &eet, &config);
        classify(&graph, &eet, &let_times, &config).unwrap()
    }

    #[test]
    fn test_non_tight_task_between_zero_slack_events_is_not_critical() {
        // Both endpoints of "loose" have zero slack, but its duration does
        // not saturate the path between them.
        let tasks = vec![
            Task::new("tight", 5, "1", "2"),
            Task::new("loose", 3, "1", "2"),
        ];
        let (slack, critical) = classify_tasks(&tasks);
        assert!(slack.iter().all(|&s| s == 0));
        assert_eq!(critical, vec!["tight"]);
    }

    #[test]
    fn test_critical_names_in_input_order() {
        let tasks = vec![
            Task::new("B", 4, "2", "3"),
            Task::new("A", 3, "1", "2"),
        ];
        let (_slack, critical) = classify_tasks(&tasks);
        assert_eq!(critical, vec!["B", "A"]);
    }

    #[test]
    fn test_incomplete_coverage_is_an_invariant_violation() {
        let tasks = vec![Task::new("A", 3, "1", "2")];
        let graph = build(&tasks).unwrap();
        let config = CpmConfig::default();
        let eet = forward_pass(&graph, &config);
        let truncated = vec![0i64]; // one event short
        assert_eq!(
            classify(&graph, &eet, &truncated, &config),
            Err(InvariantViolation::IncompleteCoverage {
                eet_len: 2,
                let_len: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn test_negative_slack_is_an_invariant_violation() {
        let tasks = vec![Task::new("A", 3, "1", "2")];
        let graph = build(&tasks).unwrap();
        let config = CpmConfig::default();
        let eet = forward_pass(&graph, &config);
        // Corrupt LET table: event "2" may not occur before time 3.
        let corrupt = vec![0i64, 2];
        let result = classify(&graph, &eet, &corrupt, &config);
        assert_eq!(
            result,
            Err(InvariantViolation::NegativeSlack {
                event: "2".to_string(),
                eet: 3,
                let_time: 2,
                slack: -1
            })
        );
    }
}
