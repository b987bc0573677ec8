//! Percentile-based importance classification.

use todosim_core::Task;

/// Default fraction of the priority distribution that does NOT count as
/// important; the top `1 - threshold` of tasks by priority do.
pub const DEFAULT_PRIORITY_THRESHOLD: f64 = 0.75;

/// Select the tasks whose priority places them in the top `1 - threshold`
/// fraction of the given sequence.
///
/// The sequence is sorted by ascending priority (stable) and the suffix
/// starting at index `round(threshold × N)` is returned. Importance is
/// relative to the sequence passed in: callers classify a simulation's
/// completed subset, not the full task set. An empty sequence yields an
/// empty selection.
pub fn important_tasks(tasks: &[Task], threshold: f64) -> Vec<&Task> {
    let mut by_priority: Vec<&Task> = tasks.iter().collect();
    by_priority.sort_by_key(|task| task.priority);

    let cut = (threshold * by_priority.len() as f64).round() as usize;
    by_priority.split_off(cut.min(by_priority.len()))
}
