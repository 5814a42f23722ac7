//! Backward scheduling pass: latest event times.

use crate::config::CpmConfig;
use crate::graph::ProjectGraph;
use crate::log_events;

/// Compute the latest event time for every event.
///
/// The result is indexed by interned event id. Events are processed in
/// reverse topological order so every successor is final before it is read.
/// Each sink is anchored to its own earliest time (a branch cannot finish
/// later than it is earliest able to); every other event takes the minimum
/// latest-start over its outgoing tasks. Because outgoing-empty is exactly
/// the sink condition, every event is covered by one of the two rules, and
/// the whole computation stays in the integer domain with no infinity
/// sentinel.
///
/// Requires the acyclic graph and the EET vector computed for it.
pub fn backward_pass(graph: &ProjectGraph, eet: &[i64], config: &CpmConfig) -> Vec<i64> {
    let mut let_times = vec![0i64; graph.event_count()];

    for &event in graph.topo_order().iter().rev() {
        let outgoing = graph.outgoing(event);
        let value = if outgoing.is_empty() {
            eet[event as usize]
        } else {
            let mut latest = i64::MAX;
            for &task_index in outgoing {
                let (_, end) = graph.endpoints(task_index);
                let start_by = let_times[end as usize] - graph.task(task_index).duration;
                latest = latest.min(start_by);
            }
            latest
        };
        let_times[event as usize] = value;
        log_events!(
            config.verbosity,
            "LET[{}] = {}",
            graph.event_name(event),
            value
        );
    }

    let_times
}
