//! # todosim-core
//!
//! Core domain model and traits for the todosim scheduling simulator.
//!
//! This crate provides:
//! - Domain types: `Task`, `Duration`, `SimulationResult`
//! - The `Clock` trait and its `SystemClock`/`FixedClock` implementations
//! - Error types shared across the workspace
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use todosim_core::{Duration, Task};
//!
//! let task = Task::new("write-report")
//!     .title("Write the quarterly report")
//!     .priority(80)
//!     .duration(Duration::hours(3))
//!     .deadline(Utc.with_ymd_and_hms(2025, 6, 2, 17, 0, 0).unwrap());
//! assert!(!task.is_complete());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Type Aliases
// ============================================================================

/// Unique identifier for a task
pub type TaskId = String;

/// Estimated effort in working time
///
/// Stored as whole minutes. The simulator interprets a task's duration as
/// elapsed hours of work, both when computing the time budget and when
/// advancing the simulation clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Duration {
    /// Number of minutes
    pub minutes: i64,
}

impl Duration {
    pub const fn zero() -> Self {
        Self { minutes: 0 }
    }

    pub const fn minutes(m: i64) -> Self {
        Self { minutes: m }
    }

    pub const fn hours(h: i64) -> Self {
        Self { minutes: h * 60 }
    }

    pub fn as_hours(&self) -> f64 {
        self.minutes as f64 / 60.0
    }

    pub fn is_positive(&self) -> bool {
        self.minutes > 0
    }
}

impl std::ops::Add for Duration {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { minutes: self.minutes + rhs.minutes }
    }
}

impl std::ops::Sub for Duration {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { minutes: self.minutes - rhs.minutes }
    }
}

// ============================================================================
// Task
// ============================================================================

/// A unit of work as consumed by the simulation engine
///
/// Tasks are value types: a simulation run clones its input and never mutates
/// the caller's list. Only `priority`, `duration` and `deadline` drive
/// ordering and outcome; `id` and `title` are carried for reporting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Human-readable name
    pub title: String,
    /// Scheduling priority (higher = more important)
    pub priority: i32,
    /// Effort estimate; must be positive when fed to the simulator
    pub duration: Duration,
    /// Timestamp the task should finish by
    pub deadline: DateTime<Utc>,
    /// Set by the simulator when the task finishes within budget
    #[serde(default)]
    pub completion_date: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new task with the given ID
    ///
    /// The deadline defaults to the Unix epoch and the duration to zero;
    /// both are expected to be set through the builder methods. A zero
    /// duration is rejected at the simulation boundary.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            title: id.clone(),
            id,
            priority: 0,
            duration: Duration::zero(),
            deadline: DateTime::UNIX_EPOCH,
            completion_date: None,
        }
    }

    /// Set the task title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the priority
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Set the effort estimate
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the deadline
    pub fn deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Mark the task as completed at the given instant
    pub fn completed_at(mut self, instant: DateTime<Utc>) -> Self {
        self.completion_date = Some(instant);
        self
    }

    /// Whether the task has a completion timestamp
    pub fn is_complete(&self) -> bool {
        self.completion_date.is_some()
    }

    /// Whether the task completed strictly before its deadline
    pub fn completed_on_time(&self) -> bool {
        self.completion_date.is_some_and(|done| done < self.deadline)
    }
}

// ============================================================================
// Simulation Outcome
// ============================================================================

/// Outcome of replaying one heuristic ordering against the time budget
///
/// All three ratios lie in `[0, 1]` and are denominated over the *total*
/// task count, so the numbers are directly comparable across heuristics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Fraction of tasks that finished within the budget
    pub completed: f64,
    /// Fraction of tasks that finished and rank in the important percentile
    pub important_completed: f64,
    /// Fraction of tasks that finished strictly before their deadline
    pub completed_in_time: f64,
}

// ============================================================================
// Clock
// ============================================================================

/// Source of the simulation start time
///
/// The simulator never reads wall-clock time directly; it asks the injected
/// clock, so tests can pin the start instant and reproduce results exactly.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// The current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Create a clock that always reports the given instant
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Simulation error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("Task set is empty")]
    EmptyTaskSet,

    #[error("Task '{0}' has a non-positive duration")]
    NonPositiveDuration(TaskId),

    #[error("Unknown heuristic: {0}")]
    UnknownHeuristic(String),

    #[error("Hours per day must be a positive number, got {0}")]
    InvalidHoursPerDay(f64),

    #[error("Priority threshold must lie in [0, 1], got {0}")]
    InvalidPriorityThreshold(f64),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn duration_arithmetic() {
        let d1 = Duration::hours(5);
        let d2 = Duration::hours(3);
        assert_eq!((d1 + d2).as_hours(), 8.0);
        assert_eq!((d1 - d2).as_hours(), 2.0);
    }

    #[test]
    fn duration_constructors() {
        let d_min = Duration::minutes(120);
        assert_eq!(d_min.minutes, 120);
        assert_eq!(d_min.as_hours(), 2.0);

        let d_hours = Duration::hours(3);
        assert_eq!(d_hours.minutes, 180);

        assert!(!Duration::zero().is_positive());
        assert!(!Duration::minutes(-5).is_positive());
        assert!(Duration::minutes(1).is_positive());
    }

    #[test]
    fn duration_ordering() {
        assert!(Duration::minutes(59) < Duration::hours(1));
        assert!(Duration::hours(2) > Duration::minutes(90));
    }

    #[test]
    fn task_builder() {
        let deadline = Utc.with_ymd_and_hms(2025, 6, 2, 17, 0, 0).unwrap();
        let task = Task::new("write-report")
            .title("Write the quarterly report")
            .priority(80)
            .duration(Duration::hours(3))
            .deadline(deadline);

        assert_eq!(task.id, "write-report");
        assert_eq!(task.title, "Write the quarterly report");
        assert_eq!(task.priority, 80);
        assert_eq!(task.duration, Duration::hours(3));
        assert_eq!(task.deadline, deadline);
        assert_eq!(task.completion_date, None);
    }

    #[test]
    fn task_title_defaults_to_id() {
        let task = Task::new("inbox-zero");
        assert_eq!(task.title, "inbox-zero");
    }

    #[test]
    fn task_completion_helpers() {
        let deadline = Utc.with_ymd_and_hms(2025, 6, 2, 17, 0, 0).unwrap();
        let pending = Task::new("a").deadline(deadline);
        assert!(!pending.is_complete());
        assert!(!pending.completed_on_time());

        let early = pending.clone().completed_at(deadline - chrono::TimeDelta::hours(1));
        assert!(early.is_complete());
        assert!(early.completed_on_time());

        // Finishing exactly at the deadline is late
        let exact = pending.clone().completed_at(deadline);
        assert!(exact.is_complete());
        assert!(!exact.completed_on_time());
    }

    #[test]
    fn fixed_clock_is_deterministic() {
        let instant = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
        let clock = FixedClock::at(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn error_display() {
        let err = SimulationError::NonPositiveDuration("bad-task".into());
        assert!(format!("{err}").contains("bad-task"));

        let err = SimulationError::UnknownHeuristic("fastest_first".into());
        assert!(format!("{err}").contains("fastest_first"));

        let err = SimulationError::InvalidHoursPerDay(-2.0);
        assert!(format!("{err}").contains("-2"));
    }

    #[test]
    fn task_fixture_json_shape() {
        let json = r#"{
            "id": "t1",
            "title": "first",
            "priority": 40,
            "duration": { "minutes": 180 },
            "deadline": "2025-06-02T17:00:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.duration, Duration::hours(3));
        // completion_date may be omitted from fixtures
        assert_eq!(task.completion_date, None);
    }
}
