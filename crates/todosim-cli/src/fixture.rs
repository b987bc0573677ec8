//! Task fixture files.
//!
//! Fixtures are JSON objects of the form `{"tasks": [...]}` with RFC 3339
//! timestamps. The generator produces a synthetic but plausible backlog:
//! deadlines and durations drawn from exponential distributions, each
//! duration constrained to fit before its task's deadline, priorities
//! uniform in 1..=100.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, TimeDelta, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use todosim_core::{Duration, Task};

/// Mean of the deadline distribution, in days from now.
const DEADLINE_MEAN_DAYS: f64 = 5.0;
/// Mean of the duration distribution, in hours of effort.
const DURATION_MEAN_HOURS: f64 = 7.0;

#[derive(Debug, Serialize, Deserialize)]
struct TaskFile {
    tasks: Vec<Task>,
}

/// Load tasks from a fixture file
pub fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading task file {}", path.display()))?;
    let file: TaskFile = serde_json::from_str(&data)
        .with_context(|| format!("parsing task file {}", path.display()))?;
    Ok(file.tasks)
}

/// Write tasks to a fixture file
pub fn save_tasks(path: &Path, tasks: Vec<Task>) -> Result<()> {
    let file = TaskFile { tasks };
    let data = serde_json::to_string_pretty(&file)?;
    fs::write(path, data).with_context(|| format!("writing task file {}", path.display()))?;
    Ok(())
}

/// Generate a synthetic task backlog.
///
/// Deterministic for a given `(count, seed, now)` triple.
pub fn generate_tasks(count: usize, seed: u64, now: DateTime<Utc>) -> Vec<Task> {
    let mut rng = SmallRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            // Days until due, at least one
            let deadline_days = sample_exponential(&mut rng, DEADLINE_MEAN_DAYS).round() as i64 + 1;

            // Whole hours of effort, at least one, strictly less than the
            // time until the deadline
            let max_hours = deadline_days * 24;
            let duration_hours = loop {
                let drawn = sample_exponential(&mut rng, DURATION_MEAN_HOURS).round() as i64 + 1;
                if drawn < max_hours {
                    break drawn;
                }
            };

            Task::new(format!("task-{i:04}"))
                .title(format!("generated task {i}"))
                .priority(rng.random_range(1..=100))
                .duration(Duration::hours(duration_hours))
                .deadline(now + TimeDelta::days(deadline_days))
        })
        .collect()
}

/// Inverse-transform sample from an exponential distribution with the given
/// mean.
fn sample_exponential(rng: &mut SmallRng, mean: f64) -> f64 {
    let u: f64 = rng.random();
    -mean * (1.0 - u).ln()
}
