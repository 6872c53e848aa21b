//! Projection output structures

use serde::{Deserialize, Serialize};

/// One point of the chart series, taken at the start of each year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearPoint {
    pub year: u32,
    /// Principal plus deposits made so far, with no interest
    pub value_without_interest: f64,
    /// Principal and deposits compounded to this year
    pub value_with_interest: f64,
}

/// Totals and chart series for one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Future value of principal and deposits at the horizon
    pub total_amount: f64,
    /// `total_amount` less principal and one deposit per year
    pub total_interest: f64,
    /// Points for years `0..=years`
    pub series: Vec<YearPoint>,
}

impl ProjectionResult {
    /// Point at the projection horizon
    pub fn final_point(&self) -> Option<&YearPoint> {
        self.series.last()
    }

    /// Contributions the interest figure is measured against
    pub fn total_contributions(&self) -> f64 {
        self.total_amount - self.total_interest
    }

    /// Largest compounded value in the series (0 when empty)
    pub fn max_value_with_interest(&self) -> f64 {
        self.series
            .iter()
            .map(|p| p.value_with_interest)
            .fold(0.0, f64::max)
    }
}
