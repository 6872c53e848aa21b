//! Calculator configuration
//!
//! Defaults for the command line front ends, read from a JSON file. Every
//! field is optional; anything left out takes its default.

use crate::projection::Cadence;
use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Deposit cadence when none is given on the command line
    #[serde(default)]
    pub deposit_cadence: Cadence,

    /// Compounding cadence when none is given on the command line
    #[serde(default)]
    pub compound_cadence: Cadence,

    /// Chart width in terminal columns
    #[serde(default = "default_chart_width")]
    pub chart_width: u16,

    /// Chart height in terminal rows
    #[serde(default = "default_chart_height")]
    pub chart_height: u16,

    #[serde(default = "default_true")]
    pub show_chart: bool,

    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_chart_width() -> u16 { 72 }
fn default_chart_height() -> u16 { 20 }
fn default_true() -> bool { true }

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            deposit_cadence: Cadence::Yearly,
            compound_cadence: Cadence::Yearly,
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
            show_chart: true,
            output_format: OutputFormat::Text,
        }
    }
}

impl CalculatorConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}
