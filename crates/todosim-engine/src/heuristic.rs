//! Ordering heuristics.
//!
//! Each heuristic is a deterministic, pure reordering of a task sequence.
//! All sorts are stable: tasks with equal keys keep their input order.
//!
//! The registry is a closed enum rather than a name→function map, so adding
//! a heuristic is a compile-time-checked extension and report keys are fixed
//! at compile time.

use serde::{Deserialize, Serialize};
use todosim_core::{SimulationError, Task};

/// A named ordering policy over a task sequence.
///
/// `ALL` lists the variants in registry order, which is also the iteration
/// and serialization order of comparative reports.
///
/// The composite descending sorts (`easier_important_first`,
/// `easier_due_first`) order by the full key tuple in descending
/// lexicographic order. The resulting sequences do not always match what the
/// names suggest (the longest duration sorts first); the orderings are kept
/// as-is because changing them changes simulation outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Identity: tasks are worked in input order
    AsTheyCome,
    /// Earliest deadline first
    DueFirst,
    /// Latest deadline first
    DueLast,
    /// Highest priority first
    ImportantFirst,
    /// Shortest duration first
    EasierFirst,
    /// `(duration, 100 − priority)` descending
    EasierImportantFirst,
    /// `(duration, deadline)` descending
    EasierDueFirst,
}

impl Heuristic {
    /// Every registered heuristic, in registry order
    pub const ALL: [Heuristic; 7] = [
        Heuristic::AsTheyCome,
        Heuristic::DueFirst,
        Heuristic::DueLast,
        Heuristic::ImportantFirst,
        Heuristic::EasierFirst,
        Heuristic::EasierImportantFirst,
        Heuristic::EasierDueFirst,
    ];

    /// Wire name of the heuristic (also its report key)
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::AsTheyCome => "as_they_come",
            Heuristic::DueFirst => "due_first",
            Heuristic::DueLast => "due_last",
            Heuristic::ImportantFirst => "important_first",
            Heuristic::EasierFirst => "easier_first",
            Heuristic::EasierImportantFirst => "easier_important_first",
            Heuristic::EasierDueFirst => "easier_due_first",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Heuristic::AsTheyCome => "in input order",
            Heuristic::DueFirst => "earliest deadline first",
            Heuristic::DueLast => "latest deadline first",
            Heuristic::ImportantFirst => "highest priority first",
            Heuristic::EasierFirst => "shortest duration first",
            Heuristic::EasierImportantFirst => "(duration, 100 - priority) descending",
            Heuristic::EasierDueFirst => "(duration, deadline) descending",
        }
    }

    /// Reorder the tasks in place according to this heuristic.
    ///
    /// Pure besides the reordering: no task field is read or written other
    /// than the sort keys.
    pub fn order(&self, tasks: &mut [Task]) {
        match self {
            Heuristic::AsTheyCome => {}
            Heuristic::DueFirst => {
                tasks.sort_by(|a, b| a.deadline.cmp(&b.deadline));
            }
            Heuristic::DueLast => {
                tasks.sort_by(|a, b| b.deadline.cmp(&a.deadline));
            }
            Heuristic::ImportantFirst => {
                tasks.sort_by(|a, b| b.priority.cmp(&a.priority));
            }
            Heuristic::EasierFirst => {
                tasks.sort_by(|a, b| a.duration.cmp(&b.duration));
            }
            Heuristic::EasierImportantFirst => {
                tasks.sort_by(|a, b| {
                    (b.duration, 100 - b.priority).cmp(&(a.duration, 100 - a.priority))
                });
            }
            Heuristic::EasierDueFirst => {
                tasks.sort_by(|a, b| (b.duration, b.deadline).cmp(&(a.duration, a.deadline)));
            }
        }
    }
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Heuristic {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heuristic::ALL
            .iter()
            .find(|h| h.name() == s)
            .copied()
            .ok_or_else(|| SimulationError::UnknownHeuristic(s.to_string()))
    }
}
