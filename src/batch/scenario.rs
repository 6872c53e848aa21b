//! Scenario loading from CSV
//!
//! Expected columns:
//! `scenario,principal,rate,years,deposit,deposit_cadence,compound_cadence`
//!
//! The cadence columns may be blank or absent, meaning yearly.

use super::BatchError;
use crate::projection::{Cadence, ProjectionInput};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One named projection request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(rename = "scenario")]
    pub name: String,
    #[serde(default)]
    pub principal: f64,
    /// Annual rate in percent
    pub rate: f64,
    pub years: u32,
    pub deposit: f64,
    #[serde(default, deserialize_with = "deserialize_cadence")]
    pub deposit_cadence: Cadence,
    #[serde(default, deserialize_with = "deserialize_cadence")]
    pub compound_cadence: Cadence,
}

impl Scenario {
    pub fn to_input(&self) -> ProjectionInput {
        ProjectionInput {
            principal: self.principal,
            annual_rate_percent: self.rate,
            years: self.years,
            deposit_amount: self.deposit,
            deposit_cadence: self.deposit_cadence,
            compound_cadence: self.compound_cadence,
        }
    }
}

fn deserialize_cadence<'de, D>(deserializer: D) -> Result<Cadence, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(Cadence::default()),
        Some(text) => text.parse().map_err(serde::de::Error::custom),
    }
}

/// Load scenarios from a CSV file
pub fn load_scenarios(path: impl AsRef<Path>) -> Result<Vec<Scenario>, BatchError> {
    let file = File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any reader producing CSV
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>, BatchError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut scenarios = Vec::new();
    for record in rdr.deserialize() {
        let scenario: Scenario = record?;
        scenarios.push(scenario);
    }
    Ok(scenarios)
}
