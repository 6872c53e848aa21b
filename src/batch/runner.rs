//! Parallel scenario projection

use super::{BatchError, Scenario};
use crate::projection::project;
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;

/// Totals for one scenario, or the reason it was rejected
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub total_amount: Option<f64>,
    pub total_interest: Option<f64>,
    pub error: Option<String>,
}

/// Project every scenario in parallel, keeping input order.
///
/// A scenario that fails validation is reported in its outcome and does not
/// stop the others.
pub fn run_scenarios(scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
    let outcomes: Vec<ScenarioOutcome> = scenarios
        .par_iter()
        .map(|scenario| match project(&scenario.to_input()) {
            Ok(result) => ScenarioOutcome {
                name: scenario.name.clone(),
                total_amount: Some(result.total_amount),
                total_interest: Some(result.total_interest),
                error: None,
            },
            Err(err) => {
                warn!("Scenario '{}' rejected: {}", scenario.name, err);
                ScenarioOutcome {
                    name: scenario.name.clone(),
                    total_amount: None,
                    total_interest: None,
                    error: Some(err.to_string()),
                }
            }
        })
        .collect();

    let failed = outcomes.iter().filter(|o| o.error.is_some()).count();
    info!("Projected {} scenarios ({} rejected)", outcomes.len(), failed);
    outcomes
}

/// Write outcomes as `Scenario,TotalAmount,TotalInterest,Error`
pub fn write_outcomes_csv<W: Write>(
    writer: W,
    outcomes: &[ScenarioOutcome],
) -> Result<(), BatchError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Scenario", "TotalAmount", "TotalInterest", "Error"])?;
    for outcome in outcomes {
        wtr.write_record(&[
            outcome.name.clone(),
            outcome.total_amount.map(|v| format!("{:.2}", v)).unwrap_or_default(),
            outcome.total_interest.map(|v| format!("{:.2}", v)).unwrap_or_default(),
            outcome.error.clone().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
