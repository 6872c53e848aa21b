//! Raw calculator form state

use super::sanitize::{parse_amount, parse_years};
use crate::error::{ValidationError, ValidationResult};
use crate::projection::{project, Cadence, ProjectionInput, ProjectionResult};
use serde::{Deserialize, Serialize};

const PRINCIPAL: &str = "Principal";
const RATE: &str = "Interest rate";
const YEARS: &str = "Time (years)";
const DEPOSIT: &str = "Deposit";

/// Field values as typed, plus the two cadence selectors
///
/// Both cadences start on yearly. The selectors are mutually exclusive, so
/// each holds exactly one value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionForm {
    #[serde(default)]
    pub principal: String,
    #[serde(default)]
    pub rate: String,
    #[serde(default)]
    pub years: String,
    #[serde(default)]
    pub deposit: String,
    #[serde(default)]
    pub deposit_cadence: Cadence,
    #[serde(default)]
    pub compound_cadence: Cadence,
}

impl ProjectionForm {
    /// Convert the typed fields into engine input.
    ///
    /// Rate, years and deposit are required. A blank principal counts as 0.
    /// Cadence compatibility is left to [`ProjectionInput::validate`].
    pub fn to_input(&self) -> ValidationResult<ProjectionInput> {
        let principal = parse_amount(PRINCIPAL, &self.principal)?;
        let rate = parse_amount(RATE, &self.rate)?;
        let years = parse_years(YEARS, &self.years)?;
        let deposit = parse_amount(DEPOSIT, &self.deposit)?;

        let (Some(annual_rate_percent), Some(years), Some(deposit_amount)) = (rate, years, deposit)
        else {
            return Err(ValidationError::MissingFields);
        };

        Ok(ProjectionInput {
            principal: principal.unwrap_or(0.0),
            annual_rate_percent,
            years,
            deposit_amount,
            deposit_cadence: self.deposit_cadence,
            compound_cadence: self.compound_cadence,
        })
    }

    /// Parse the form and run the projection ("Calculate").
    pub fn calculate(&self) -> ValidationResult<ProjectionResult> {
        let input = self.to_input()?;
        project(&input)
    }

    /// Label shown above the deposit field
    pub fn deposit_label(&self) -> &'static str {
        match self.deposit_cadence {
            Cadence::Monthly => "Monthly Deposit:",
            Cadence::Yearly => "Yearly Deposit:",
        }
    }
}
