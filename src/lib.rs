//! NORA: compound interest projections with periodic deposits
//!
//! The core is [`projection::project`], a pure function turning a
//! [`ProjectionInput`] into totals and a year-indexed chart series.
//! Around it sit the form parsing a user-facing front end needs, chart axis
//! scaling and rendering, report formatting, configuration and batch runs.

pub mod batch;
pub mod chart;
pub mod config;
pub mod error;
pub mod form;
pub mod projection;
pub mod report;

pub use error::{ValidationError, ValidationResult};
pub use projection::{project, Cadence, ProjectionInput, ProjectionResult, YearPoint};
