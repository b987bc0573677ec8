//! # todosim-engine
//!
//! Comparative scheduling simulation: given a task set, replay several
//! ordering heuristics ("what if I worked through my tasks in this order?")
//! against a fixed time budget and report, per heuristic, what fraction of
//! tasks finish, what fraction of important tasks finish, and what fraction
//! finish on time.
//!
//! This crate provides:
//! - The closed [`Heuristic`] registry of ordering policies
//! - The percentile-based importance classifier
//! - The greedy time-budget [`Simulator`]
//! - The [`AnalysisRunner`] that evaluates every heuristic and assembles
//!   the comparative [`AnalysisReport`]
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use todosim_core::{Duration, FixedClock, Task};
//! use todosim_engine::{AnalysisRunner, Simulator};
//!
//! let start = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
//! let tasks = vec![
//!     Task::new("a").duration(Duration::hours(1)).deadline(start + chrono::TimeDelta::days(1)),
//!     Task::new("b").duration(Duration::hours(2)).deadline(start + chrono::TimeDelta::days(2)),
//! ];
//!
//! let simulator = Simulator::new(8.0).with_clock(FixedClock::at(start));
//! let report = AnalysisRunner::new(simulator).analyse(&tasks).unwrap();
//! assert_eq!(report.len(), 7);
//! ```

pub mod classify;
pub mod heuristic;
pub mod runner;
pub mod simulate;
pub mod tally;

pub use classify::{important_tasks, DEFAULT_PRIORITY_THRESHOLD};
pub use heuristic::Heuristic;
pub use runner::{AnalysisReport, AnalysisRunner};
pub use simulate::{validate_task_set, Simulator};
pub use tally::tally;
