//! Outcome aggregation.
//!
//! Reduces a simulated task set to the three summary ratios. All three are
//! denominated over the *total* task count, not the completed subset, so the
//! numbers are comparable ratios of the whole set rather than conditional
//! probabilities.

use todosim_core::{SimulationError, SimulationResult, Task};

use crate::classify::important_tasks;

/// Aggregate a simulated task set into completion ratios.
///
/// `tasks` is the full set handed back by the simulator: tasks completed
/// during the walk carry a `completion_date`, the remainder do not.
/// Importance is classified over the completed subset only.
///
/// # Errors
/// `EmptyTaskSet` if `tasks` is empty; the ratios would be undefined.
pub fn tally(tasks: &[Task], priority_threshold: f64) -> Result<SimulationResult, SimulationError> {
    if tasks.is_empty() {
        return Err(SimulationError::EmptyTaskSet);
    }
    let total = tasks.len() as f64;

    let completed: Vec<Task> = tasks.iter().filter(|t| t.is_complete()).cloned().collect();
    let important = important_tasks(&completed, priority_threshold).len();
    let in_time = completed.iter().filter(|t| t.completed_on_time()).count();

    Ok(SimulationResult {
        completed: completed.len() as f64 / total,
        important_completed: important as f64 / total,
        completed_in_time: in_time as f64 / total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use todosim_core::Duration;

    fn epoch() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap()
    }

    fn make_task(id: &str, priority: i32) -> Task {
        Task::new(id)
            .priority(priority)
            .duration(Duration::hours(1))
            .deadline(epoch() + TimeDelta::days(1))
    }

    #[test]
    fn empty_set_is_an_error() {
        assert_eq!(tally(&[], 0.75), Err(SimulationError::EmptyTaskSet));
    }

    #[test]
    fn all_ratios_over_total_count() {
        // Four tasks: two completed (one on time, one past deadline), two pending.
        let on_time = make_task("on-time", 90).completed_at(epoch());
        let late = make_task("late", 80).completed_at(epoch() + TimeDelta::days(2));
        let tasks = vec![on_time, late, make_task("p1", 10), make_task("p2", 20)];

        let result = tally(&tasks, 0.5).unwrap();
        assert_eq!(result.completed, 0.5);
        // classifier over the 2 completed at threshold 0.5 → 1 important, over total 4
        assert_eq!(result.important_completed, 0.25);
        assert_eq!(result.completed_in_time, 0.25);
    }

    #[test]
    fn nothing_completed_yields_zeros() {
        let tasks = vec![make_task("a", 10), make_task("b", 20)];
        let result = tally(&tasks, 0.75).unwrap();
        assert_eq!(result.completed, 0.0);
        assert_eq!(result.important_completed, 0.0);
        assert_eq!(result.completed_in_time, 0.0);
    }

    #[test]
    fn importance_is_drawn_from_the_completed_subset() {
        // The highest-priority task is NOT completed; importance must be
        // judged among the completed ones only.
        let tasks = vec![
            make_task("unfinished-vip", 100),
            make_task("done-a", 10).completed_at(epoch()),
            make_task("done-b", 20).completed_at(epoch()),
        ];
        let result = tally(&tasks, 0.5).unwrap();
        // completed = [10, 20]; cut at round(0.5*2)=1 → priority 20 is important
        assert!((result.important_completed - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn important_rate_never_exceeds_completed_rate() {
        let tasks = vec![
            make_task("a", 5).completed_at(epoch()),
            make_task("b", 50).completed_at(epoch()),
            make_task("c", 95),
        ];
        for threshold in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let result = tally(&tasks, threshold).unwrap();
            assert!(result.important_completed <= result.completed);
        }
    }
}
