//! Presentation of projection results as text, CSV and JSON

mod currency;
mod output;

pub use currency::{format_currency, NOT_A_NUMBER, TOO_LARGE};
pub use output::{summary_lines, to_json, write_series_csv, OutputFormat};
