//! Forward scheduling pass: earliest event times.

use crate::config::CpmConfig;
use crate::graph::ProjectGraph;
use crate::log_events;

/// Compute the earliest event time for every event.
///
/// The result is indexed by interned event id. Events are processed in
/// topological order so every predecessor is final before it is read: source
/// events start at zero, every other event takes the maximum finish time
/// over its incoming tasks (the longest path from a source).
///
/// Requires an acyclic graph, which [`crate::graph::build`] guarantees.
pub fn forward_pass(graph: &ProjectGraph, config: &CpmConfig) -> Vec<i64> {
    let mut eet = vec![0i64; graph.event_count()];

    for &event in graph.topo_order() {
        let mut best = 0i64;
        let mut via: Option<usize> = None;
        for &task_index in graph.incoming(event) {
            let (start, _) = graph.endpoints(task_index);
            let finish = eet[start as usize] + graph.task(task_index).duration;
            // Ties keep the first incoming task; the numeric max is
            // unambiguous either way.
            if via.is_none() || finish > best {
                best = finish;
                via = Some(task_index);
            }
        }
        eet[event as usize] = best;
        if let Some(task_index) = via {
            log_events!(
                config.verbosity,
                "EET[{}] = {} via task {}",
                graph.event_name(event),
                best,
                graph.task(task_index).name
            );
        }
    }

    eet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build;
    use crate::models::Task;

    fn eet_of(tasks: &[Task]) -> (crate::graph::ProjectGraph, Vec<i64>) {
        let graph = build(tasks).unwrap();
        let eet = forward_pass(&graph, &CpmConfig::default());
        (graph, eet)
    }

    fn lookup(graph: &crate::graph::ProjectGraph, eet: &[i64], event: &str) -> i64 {
        let id = (0..graph.event_count() as u32)
            .find(|&e| graph.event_name(e) == event)
            .unwrap();
        eet[id as usize]
    }

    #[test]
    fn test_chain_accumulates_durations() {
        let tasks = vec![
            Task::new("A", 3, "1", "2"),
            Task::new("B", 4, "2", "3"),
        ];
        let (graph, eet) = eet_of(&tasks);
        assert_eq!(lookup(&graph, &eet, "1"), 0);
        assert_eq!(lookup(&graph, &eet, "2"), 3);
        assert_eq!(lookup(&graph, &eet, "3"), 7);
    }

    #[test]
    fn test_merge_takes_longest_path() {
        let tasks = vec![
            Task::new("short", 1, "1", "3"),
            Task::new("long_a", 4, "1", "2"),
            Task::new("long_b", 5, "2", "3"),
        ];
        let (graph, eet) = eet_of(&tasks);
        assert_eq!(lookup(&graph, &eet, "3"), 9);
    }

    #[test]
    fn test_every_source_starts_at_zero() {
        let tasks = vec![
            Task::new("A", 2, "s1", "m"),
            Task::new("B", 9, "s2", "m"),
        ];
        let (graph, eet) = eet_of(&tasks);
        assert_eq!(lookup(&graph, &eet, "s1"), 0);
        assert_eq!(lookup(&graph, &eet, "s2"), 0);
        assert_eq!(lookup(&graph, &eet, "m"), 9);
    }
}
