//! Form input handling between a user-facing front end and the engine

mod fields;
mod sanitize;

pub use fields::ProjectionForm;
pub use sanitize::{parse_amount, parse_years, sanitize_amount};
