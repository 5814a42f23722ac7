//! Adapter from task-name precedence to the event-based task form.
//!
//! Some task sources express ordering as "activity D follows B and C"
//! rather than through shared events. This adapter translates such
//! activity-on-node input into the start/end-event shape the core schedules,
//! synthesizing zero-duration dummy tasks where an activity joins several
//! predecessors. It is a separate, explicit step; the core itself accepts
//! only the event form.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Task;

/// Event at which activities without predecessors begin.
pub const SOURCE_EVENT: &str = "start";

/// An activity whose ordering is given by predecessor names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySpec {
    pub name: String,
    pub duration: i64,
    #[serde(default)]
    pub predecessors: Vec<String>,
}

impl ActivitySpec {
    pub fn new(name: impl Into<String>, duration: i64, predecessors: &[&str]) -> Self {
        Self {
            name: name.into(),
            duration,
            predecessors: predecessors.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrecedenceError {
    #[error("duplicate activity name: {0:?}")]
    DuplicateActivity(String),
    #[error("activity {activity:?} lists unknown predecessor {predecessor:?}")]
    UnknownPredecessor {
        activity: String,
        predecessor: String,
    },
}

/// Result of the translation: event-form tasks plus the names of the
/// synthesized dummy tasks. Dummies carry zero duration and exist only to
/// join an activity to several predecessors; callers that report critical
/// tasks to a user may want to filter them out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrecedenceTranslation {
    pub tasks: Vec<Task>,
    pub dummy_tasks: Vec<String>,
}

fn finish_event(activity: &str) -> String {
    format!("{activity}.end")
}

fn join_event(activity: &str) -> String {
    format!("{activity}.start")
}

/// Translate activity-on-node specs into event-based tasks.
///
/// Each activity ends at its own finish event. An activity with no
/// predecessors starts at [`SOURCE_EVENT`]; with one predecessor it starts
/// at that predecessor's finish event; with several it starts at a join
/// event fed by one zero-duration dummy task per predecessor, named
/// `"{predecessor}->{activity}"`.
pub fn translate(specs: &[ActivitySpec]) -> Result<PrecedenceTranslation, PrecedenceError> {
    let mut known: FxHashSet<&str> = FxHashSet::default();
    for spec in specs {
        if !known.insert(spec.name.as_str()) {
            return Err(PrecedenceError::DuplicateActivity(spec.name.clone()));
        }
    }
    for spec in specs {
        for predecessor in &spec.predecessors {
            if !known.contains(predecessor.as_str()) {
                return Err(PrecedenceError::UnknownPredecessor {
                    activity: spec.name.clone(),
                    predecessor: predecessor.clone(),
                });
            }
        }
    }

    let mut translation = PrecedenceTranslation::default();
    for spec in specs {
        // Repeated predecessor entries are harmless; keep the first.
        let mut predecessors: Vec<&str> = Vec::with_capacity(spec.predecessors.len());
        for predecessor in &spec.predecessors {
            if !predecessors.contains(&predecessor.as_str()) {
                predecessors.push(predecessor);
            }
        }

        let start_event = match predecessors.as_slice() {
            [] => SOURCE_EVENT.to_string(),
            [only] => finish_event(only),
            _ => {
                let join = join_event(&spec.name);
                for predecessor in &predecessors {
                    let dummy = format!("{predecessor}->{}", spec.name);
                    translation.tasks.push(Task::new(
                        dummy.clone(),
                        0,
                        finish_event(predecessor),
                        join.clone(),
                    ));
                    translation.dummy_tasks.push(dummy);
                }
                join
            }
        };

        translation
            .tasks
            .push(Task::new(spec.name.clone(), spec.duration, start_event, finish_event(&spec.name)));
    }

    Ok(translation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_schedule;

    #[test]
    fn test_chain_needs_no_dummies() {
        let specs = vec![
            ActivitySpec::new("a", 2, &[]),
            ActivitySpec::new("b", 3, &["a"]),
        ];
        let translation = translate(&specs).unwrap();
        assert!(translation.dummy_tasks.is_empty());
        assert_eq!(
            translation.tasks,
            vec![
                Task::new("a", 2, "start", "a.end"),
                Task::new("b", 3, "a.end", "b.end"),
            ]
        );
    }

    #[test]
    fn test_join_synthesizes_zero_duration_dummies() {
        let specs = vec![
            ActivitySpec::new("a", 2, &[]),
            ActivitySpec::new("b", 3, &["a"]),
            ActivitySpec::new("c", 5, &["a"]),
            ActivitySpec::new("d", 4, &["b", "c"]),
        ];
        let translation = translate(&specs).unwrap();
        assert_eq!(translation.dummy_tasks, vec!["b->d", "c->d"]);

        let dummy = translation
            .tasks
            .iter()
            .find(|t| t.name == "b->d")
            .unwrap();
        assert_eq!(dummy.duration, 0);
        assert_eq!(dummy.start_event, "b.end");
        assert_eq!(dummy.end_event, "d.start");
    }

    #[test]
    fn test_translated_diamond_schedules_correctly() {
        let specs = vec![
            ActivitySpec::new("a", 2, &[]),
            ActivitySpec::new("b", 3, &["a"]),
            ActivitySpec::new("c", 5, &["a"]),
            ActivitySpec::new("d", 4, &["b", "c"]),
        ];
        let translation = translate(&specs).unwrap();
        let result = compute_schedule(&translation.tasks).unwrap();

        assert_eq!(result.completion_time(), 11); // 2 + 5 + 4
        assert_eq!(result.earliest_event_times["d.start"], 7);

        // Critical path runs through c; the b branch has slack 2.
        let critical: Vec<&str> = result
            .critical_tasks
            .iter()
            .filter(|name| !translation.dummy_tasks.contains(name))
            .map(String::as_str)
            .collect();
        assert_eq!(critical, vec!["a", "c", "d"]);
        assert!(!result.is_critical("b"));
    }

    #[test]
    fn test_duplicate_activity_rejected() {
        let specs = vec![
            ActivitySpec::new("a", 2, &[]),
            ActivitySpec::new("a", 3, &[]),
        ];
        assert_eq!(
            translate(&specs),
            Err(PrecedenceError::DuplicateActivity("a".to_string()))
        );
    }

    #[test]
    fn test_unknown_predecessor_rejected() {
        let specs = vec![ActivitySpec::new("b", 3, &["ghost"])];
        assert_eq!(
            translate(&specs),
            Err(PrecedenceError::UnknownPredecessor {
                activity: "b".to_string(),
                predecessor: "ghost".to_string()
            })
        );
    }

    #[test]
    fn test_repeated_predecessor_entries_are_deduplicated() {
        let specs = vec![
            ActivitySpec::new("a", 2, &[]),
            ActivitySpec::new("b", 1, &[]),
            ActivitySpec::new("c", 3, &["a", "b", "a"]),
        ];
        let translation = translate(&specs).unwrap();
        assert_eq!(translation.dummy_tasks, vec!["a->c", "b->c"]);
    }
}
