//! Greedy time-budget simulation.
//!
//! # Algorithm
//!
//! 1. Budget: `budget = total duration × (hours_per_day / 24)`, the total
//!    estimated work-hours stretched into elapsed calendar time by how many
//!    hours per day the user actually works.
//! 2. Order the tasks with the requested heuristic (stable sort).
//! 3. Walk the ordered sequence, advancing a cumulative clock by each task's
//!    duration. The first task that pushes the clock past the budget ends
//!    the walk; it and everything after it stay incomplete. A task landing
//!    exactly on the budget boundary completes.
//! 4. Aggregate the full set (completed ∪ untouched remainder) into ratios.
//!
//! The walk is single-resource and non-preemptive: the heuristic only
//! controls *order*, while the budget check is identical across heuristics,
//! which is what makes the comparison meaningful. Elapsed time is tracked in
//! whole minutes so the boundary comparison is exact.

use std::sync::Arc;

use chrono::TimeDelta;
use tracing::debug;

use todosim_core::{Clock, SimulationError, SimulationResult, SystemClock, Task};

use crate::classify::DEFAULT_PRIORITY_THRESHOLD;
use crate::heuristic::Heuristic;
use crate::tally::tally;

/// Check the task-set preconditions shared by every simulation entry point.
///
/// # Errors
/// `EmptyTaskSet` for an empty sequence, `NonPositiveDuration` for the first
/// task whose effort estimate is zero or negative.
pub fn validate_task_set(tasks: &[Task]) -> Result<(), SimulationError> {
    if tasks.is_empty() {
        return Err(SimulationError::EmptyTaskSet);
    }
    if let Some(task) = tasks.iter().find(|t| !t.duration.is_positive()) {
        return Err(SimulationError::NonPositiveDuration(task.id.clone()));
    }
    Ok(())
}

/// Replays heuristic orderings against a time budget.
///
/// Carries the run configuration: the hours worked per calendar day, the
/// importance percentile threshold, and the clock that seeds the simulation
/// start time. Construction is infallible; configuration is validated when a
/// simulation starts, never mid-run.
#[derive(Clone, Debug)]
pub struct Simulator {
    hours_per_day: f64,
    priority_threshold: f64,
    clock: Arc<dyn Clock>,
}

impl Simulator {
    /// Create a simulator working `hours_per_day` hours per calendar day,
    /// with the default priority threshold and the system clock.
    pub fn new(hours_per_day: f64) -> Self {
        Self {
            hours_per_day,
            priority_threshold: DEFAULT_PRIORITY_THRESHOLD,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock seeding the simulation start time
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Replace the importance percentile threshold
    pub fn with_priority_threshold(mut self, threshold: f64) -> Self {
        self.priority_threshold = threshold;
        self
    }

    pub fn hours_per_day(&self) -> f64 {
        self.hours_per_day
    }

    pub fn priority_threshold(&self) -> f64 {
        self.priority_threshold
    }

    /// Fail fast on bad configuration or input, before any computation.
    fn check_preconditions(&self, tasks: &[Task]) -> Result<(), SimulationError> {
        if !self.hours_per_day.is_finite() || self.hours_per_day <= 0.0 {
            return Err(SimulationError::InvalidHoursPerDay(self.hours_per_day));
        }
        if !(0.0..=1.0).contains(&self.priority_threshold) {
            return Err(SimulationError::InvalidPriorityThreshold(
                self.priority_threshold,
            ));
        }
        validate_task_set(tasks)
    }

    /// Replay one heuristic ordering against the time budget.
    ///
    /// The input is cloned; the caller's tasks are never mutated.
    ///
    /// # Errors
    /// Precondition failures only ([`validate_task_set`] plus
    /// `InvalidHoursPerDay` / `InvalidPriorityThreshold`); a run that starts
    /// always completes.
    pub fn simulate(
        &self,
        tasks: &[Task],
        heuristic: Heuristic,
    ) -> Result<SimulationResult, SimulationError> {
        self.check_preconditions(tasks)?;

        let start = self.clock.now();
        let total_minutes: i64 = tasks.iter().map(|t| t.duration.minutes).sum();
        let budget_minutes = total_minutes as f64 * (self.hours_per_day / 24.0);

        let mut ordered = tasks.to_vec();
        heuristic.order(&mut ordered);

        let mut elapsed_minutes: i64 = 0;
        let mut completed = 0usize;
        for task in &mut ordered {
            elapsed_minutes += task.duration.minutes;
            if elapsed_minutes as f64 > budget_minutes {
                // Budget exhausted: this task and all remaining stay incomplete.
                break;
            }
            task.completion_date = Some(start + TimeDelta::minutes(elapsed_minutes));
            completed += 1;
        }

        debug!(
            heuristic = %heuristic,
            completed,
            total = ordered.len(),
            "simulation finished"
        );

        tally(&ordered, self.priority_threshold)
    }
}
