//! Single-pass compound interest projection
//!
//! For each year `t` in `0..=years` with `n` compounding periods per year and
//! periodic rate `i = r / n`:
//!
//! ```text
//! FV(t) = P * (1 + i)^(n*t) + PMT * ((1 + i)^(n*t) - 1) / i
//! ```
//!
//! The deposit term is the future value of an ordinary annuity. At a zero
//! rate it reduces to `PMT * n * t`.

use super::{ProjectionInput, ProjectionResult, YearPoint, MONTHS_PER_YEAR};
use crate::error::ValidationResult;
use log::debug;

/// Project principal and deposits over `input.years` years.
///
/// Fails without computing anything if the input does not validate.
pub fn project(input: &ProjectionInput) -> ValidationResult<ProjectionResult> {
    input.validate()?;

    let n = input.compound_cadence.periods_per_year();
    let periodic_rate = input.periodic_rate();
    let deposits_per_year = deposits_per_year_without_interest(n) as f64;

    let mut series = Vec::with_capacity(input.years as usize + 1);
    let mut value_without_interest = input.principal;

    for year in 0..=input.years {
        let periods = n * year;
        let value_with_interest =
            future_value(input.principal, input.deposit_amount, periodic_rate, periods);

        series.push(YearPoint {
            year,
            value_without_interest,
            value_with_interest,
        });

        value_without_interest += input.deposit_amount * deposits_per_year;
    }

    // Totals come from the closed form at the horizon, not from the series
    let total_amount = future_value(
        input.principal,
        input.deposit_amount,
        periodic_rate,
        n * input.years,
    );
    let total_interest =
        total_amount - (input.principal + input.deposit_amount * input.years as f64);

    debug!(
        "Projected P={:.2} r={}% t={} PMT={:.2} ({} deposits, {} compounding): total={:.2} interest={:.2}",
        input.principal,
        input.annual_rate_percent,
        input.years,
        input.deposit_amount,
        input.deposit_cadence,
        input.compound_cadence,
        total_amount,
        total_interest
    );

    Ok(ProjectionResult {
        total_amount,
        total_interest,
        series,
    })
}

/// Future value of `principal` plus a deposit of `deposit` at the end of each
/// period, after `periods` periods at `periodic_rate`.
pub fn future_value(principal: f64, deposit: f64, periodic_rate: f64, periods: u32) -> f64 {
    if periodic_rate == 0.0 {
        return principal + deposit * periods as f64;
    }

    let growth = (1.0 + periodic_rate).powf(periods as f64);
    let principal_fv = principal * growth;
    let deposits_fv = deposit * ((growth - 1.0) / periodic_rate);
    principal_fv + deposits_fv
}

/// Deposits per year counted in the "value without interest" line.
///
/// This follows the compounding cadence, not the deposit cadence: 12 whenever
/// interest compounds monthly, otherwise 1. The two only differ for cadence
/// combinations that validation already rejects, so the figure is kept as is.
pub fn deposits_per_year_without_interest(periods_per_year: u32) -> u32 {
    if periods_per_year == MONTHS_PER_YEAR {
        MONTHS_PER_YEAR
    } else {
        1
    }
}
