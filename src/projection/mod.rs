//! Projection engine for principal-plus-deposits growth

mod engine;
mod input;
mod result;

pub use engine::{deposits_per_year_without_interest, future_value, project};
pub use input::{Cadence, ProjectionInput};
pub use result::{ProjectionResult, YearPoint};

// ============================================================================
// Compounding Periods
// ============================================================================
// Interest is credited either once a year or once a month. The periodic rate
// is the annual rate divided by the number of periods, and a year of growth
// is that many periods of compounding.

/// Compounding periods per year for monthly cadence
pub const MONTHS_PER_YEAR: u32 = 12;

/// Compounding periods per year for yearly cadence
pub const YEARS_PER_YEAR: u32 = 1;

/// Longest horizon accepted, in years
pub const MAX_YEARS: u32 = 1_000;
