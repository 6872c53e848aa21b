//! Run projections for every scenario in a CSV file
//!
//! Outputs one row of totals per scenario for side-by-side comparison

use anyhow::{Context, Result};
use clap::Parser;
use nora::batch::{load_scenarios, run_scenarios, write_outcomes_csv};
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "run_batch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Project a file of compound interest scenarios")]
struct Cli {
    /// Scenario CSV (scenario,principal,rate,years,deposit,deposit_cadence,compound_cadence)
    input: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "batch_projection_output.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let start = Instant::now();

    let scenarios = load_scenarios(&cli.input)
        .with_context(|| format!("Failed to load scenarios from {}", cli.input.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let outcomes = run_scenarios(&scenarios);

    let file = File::create(&cli.output)
        .with_context(|| format!("Failed to create output file {}", cli.output.display()))?;
    write_outcomes_csv(file, &outcomes)?;
    println!("Output written to {}", cli.output.display());

    let rejected: Vec<_> = outcomes.iter().filter(|o| o.error.is_some()).collect();
    if !rejected.is_empty() {
        println!("\nRejected scenarios:");
        for outcome in rejected {
            println!("  {}: {}", outcome.name, outcome.error.as_deref().unwrap_or_default());
        }
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
