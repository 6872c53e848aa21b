//! Batch projection of scenario files

mod scenario;
mod runner;

pub use scenario::{load_scenarios, load_scenarios_from_reader, Scenario};
pub use runner::{run_scenarios, write_outcomes_csv, ScenarioOutcome};

use thiserror::Error;

/// Errors reading or writing batch files
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
