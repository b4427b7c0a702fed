//! # liftoff-cli
//!
//! Command-line driver for Liftoff goal runs.
//!
//! Wires the default handler registry, executes one goal through the
//! planning-and-execution engine, and prints the evaluation summary plus
//! the final summary text (when the run produced one).
//!
//! ## Usage
//!
//! ```text
//! liftoff "find the next spacex launch, check the weather, summarize"
//! liftoff --max-steps 4 --json "check bitcoin price and get related news"
//! ```
//!
//! API keys are optional: without `OPENWEATHER_API_KEY` / `NEWS_API_KEY`
//! the weather and news agents serve mock data.

use anyhow::Result;
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use liftoff_agents::default_registry;
use liftoff_core::{evaluate, ExecutionEngine};

/// Liftoff — run a free-text goal through the multi-agent engine.
#[derive(Parser)]
#[command(name = "liftoff", version, about)]
struct Cli {
    /// The goal to execute (e.g., "find the next launch and summarize").
    goal: String,

    /// Hard ceiling on executed steps, independent of plan length.
    #[arg(long, default_value_t = 10)]
    max_steps: usize,

    /// Emit the full GoalState and summary as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let engine = ExecutionEngine::new(default_registry());
    let goal = engine.run(&cli.goal, cli.max_steps);
    let summary = evaluate(&goal);

    if cli.json {
        let report = serde_json::json!({
            "goal_state": goal,
            "evaluation": summary,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Goal: {}", goal.description);
    println!("Plan: {}", goal.plan.join(" -> "));
    println!("State: {}", goal.state);
    println!("Satisfied: {}", summary.satisfied);
    println!("Satisfaction Score: {:.1}%", summary.satisfaction_score);
    println!("Trajectory: {}", summary.trajectory.join(" -> "));

    if let Some(record) = &summary.final_record {
        if !record.succeeded {
            println!("Failure: {}", record.message);
        }
    }

    if let Some(Value::String(text)) = goal.context.get("summary") {
        println!("\n{text}");
    }

    Ok(())
}
