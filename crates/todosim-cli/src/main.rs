//! todosim CLI - Comparative To-Do Scheduling Simulator
//!
//! Command-line interface for generating, validating and analysing task
//! fixtures.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use todosim_engine::{validate_task_set, AnalysisRunner, Simulator, DEFAULT_PRIORITY_THRESHOLD};

mod fixture;
mod report;

#[derive(Parser)]
#[command(name = "todosim")]
#[command(author, version, about = "Comparative to-do scheduling simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a task fixture file against the engine's preconditions
    Check {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Replay every scheduling heuristic against a task set and report outcomes
    Analyse {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Hours of work available per calendar day
        #[arg(long, value_name = "HOURS")]
        hours_per_day: f64,

        /// Priority percentile above which a completed task counts as important
        #[arg(
            long,
            value_name = "FRACTION",
            env = "TODOSIM_PRIORITY_THRESHOLD",
            default_value_t = DEFAULT_PRIORITY_THRESHOLD
        )]
        priority_threshold: f64,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a synthetic task fixture for experimentation
    Generate {
        /// Number of tasks to generate
        #[arg(value_name = "COUNT")]
        count: usize,

        /// Output file path
        #[arg(short, long, default_value = "tasks.json")]
        output: PathBuf,

        /// RNG seed for reproducible fixtures
        #[arg(long, default_value_t = 7)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file } => check(file),
        Commands::Analyse {
            file,
            hours_per_day,
            priority_threshold,
            format,
            output,
        } => analyse(file, hours_per_day, priority_threshold, &format, output),
        Commands::Generate { count, output, seed } => generate(count, output, seed),
    }
}

fn check(file: PathBuf) -> Result<()> {
    let tasks = fixture::load_tasks(&file)?;
    validate_task_set(&tasks)
        .with_context(|| format!("task file {} failed validation", file.display()))?;
    println!("{}: {} tasks, ok", file.display(), tasks.len());
    Ok(())
}

fn analyse(
    file: PathBuf,
    hours_per_day: f64,
    priority_threshold: f64,
    format: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    let tasks = fixture::load_tasks(&file)?;
    info!(tasks = tasks.len(), hours_per_day, "running analysis");

    let simulator = Simulator::new(hours_per_day).with_priority_threshold(priority_threshold);
    let report = AnalysisRunner::new(simulator)
        .analyse(&tasks)
        .context("analysis failed")?;

    let rendered = match format {
        "text" => report::render_text(&report),
        "json" => report::render_json(&report)?,
        other => anyhow::bail!("unsupported output format: {other}"),
    };

    match output {
        Some(path) => fs::write(&path, rendered)
            .with_context(|| format!("writing report to {}", path.display()))?,
        None => print!("{rendered}"),
    }
    Ok(())
}

fn generate(count: usize, output: PathBuf, seed: u64) -> Result<()> {
    anyhow::ensure!(count > 0, "task count must be positive");

    let tasks = fixture::generate_tasks(count, seed, Utc::now());
    fixture::save_tasks(&output, tasks)?;
    println!("wrote {} tasks to {}", count, output.display());
    Ok(())
}
