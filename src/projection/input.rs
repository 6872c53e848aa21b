//! Projection inputs and their validation

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{MAX_YEARS, MONTHS_PER_YEAR, YEARS_PER_YEAR};

/// How often deposits are made or interest is credited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    #[default]
    Yearly,
    Monthly,
}

impl Cadence {
    /// Number of periods in one year (1 or 12)
    pub fn periods_per_year(self) -> u32 {
        match self {
            Cadence::Yearly => YEARS_PER_YEAR,
            Cadence::Monthly => MONTHS_PER_YEAR,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Cadence::Yearly => "yearly",
            Cadence::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cadence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yearly" | "annual" | "annually" => Ok(Cadence::Yearly),
            "monthly" => Ok(Cadence::Monthly),
            other => Err(format!("unknown cadence '{}' (expected yearly or monthly)", other)),
        }
    }
}

/// Everything the engine needs for one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Initial lump sum
    pub principal: f64,

    /// Annual interest rate in percent (5.0 = 5%)
    pub annual_rate_percent: f64,

    /// Projection horizon in whole years
    pub years: u32,

    /// Amount deposited each deposit period
    pub deposit_amount: f64,

    #[serde(default)]
    pub deposit_cadence: Cadence,

    #[serde(default)]
    pub compound_cadence: Cadence,
}

impl Default for ProjectionInput {
    fn default() -> Self {
        Self {
            principal: 0.0,
            annual_rate_percent: 0.0,
            years: 0,
            deposit_amount: 0.0,
            deposit_cadence: Cadence::Yearly,
            compound_cadence: Cadence::Yearly,
        }
    }
}

impl ProjectionInput {
    /// Check amounts are finite and non-negative, the horizon is at most
    /// [`MAX_YEARS`], and the deposit and compounding cadences agree.
    pub fn validate(&self) -> ValidationResult<()> {
        check_amount("Principal", self.principal)?;
        check_amount("Interest rate", self.annual_rate_percent)?;
        check_amount("Deposit", self.deposit_amount)?;
        if self.years > MAX_YEARS {
            return Err(ValidationError::TooManyYears { max: MAX_YEARS });
        }

        match (self.deposit_cadence, self.compound_cadence) {
            (Cadence::Monthly, Cadence::Yearly) => {
                Err(ValidationError::MonthlyDepositWithYearlyCompounding)
            }
            (Cadence::Yearly, Cadence::Monthly) => {
                Err(ValidationError::YearlyDepositWithMonthlyCompounding)
            }
            _ => Ok(()),
        }
    }

    /// Interest rate per compounding period as a fraction
    pub fn periodic_rate(&self) -> f64 {
        (self.annual_rate_percent / 100.0) / self.compound_cadence.periods_per_year() as f64
    }
}

fn check_amount(field: &'static str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field });
    }
    Ok(())
}
