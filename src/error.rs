//! Validation errors surfaced to whoever collected the inputs
//!
//! There is a single failure kind for a projection: the inputs were not
//! acceptable. Every variant's message is meant to be shown to the user as-is.

use thiserror::Error;

/// Reasons a projection request is rejected before any computation runs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// One or more required fields were left blank
    #[error("Please fill in all fields.")]
    MissingFields,

    /// A field could not be read as a number of the expected kind
    #[error("Please enter a valid number for {field}.")]
    InvalidNumber { field: &'static str },

    /// A numeric field was below zero
    #[error("{field} cannot be negative.")]
    Negative { field: &'static str },

    /// A numeric field was NaN or infinite
    #[error("{field} must be a finite number.")]
    NotFinite { field: &'static str },

    /// The horizon is longer than the engine projects
    #[error("Time cannot be more than {max} years.")]
    TooManyYears { max: u32 },

    /// Monthly deposits were combined with yearly compounding
    #[error("You cannot calculate yearly interest with a monthly deposit.")]
    MonthlyDepositWithYearlyCompounding,

    /// Yearly deposits were combined with monthly compounding
    #[error("You cannot enter a monthly deposit amount while selecting yearly compounding.")]
    YearlyDepositWithMonthlyCompounding,
}

/// Result type alias for validation-guarded operations
pub type ValidationResult<T> = Result<T, ValidationError>;
