//! Normalization of typed numeric text
//!
//! Text fields hold whatever the user typed. Before parsing, surrounding
//! whitespace is dropped and redundant leading zeros are stripped so that
//! `"007"` reads the same as `"7"`.

use crate::error::{ValidationError, ValidationResult};

/// Trim and strip leading zeros that precede another digit.
pub fn sanitize_amount(raw: &str) -> String {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();
    let mut start = 0;
    while start + 1 < bytes.len() && bytes[start] == b'0' && bytes[start + 1].is_ascii_digit() {
        start += 1;
    }
    trimmed[start..].to_string()
}

/// Parse a non-negative amount. Blank text yields `None`.
pub fn parse_amount(field: &'static str, raw: &str) -> ValidationResult<Option<f64>> {
    let cleaned = sanitize_amount(raw);
    if cleaned.is_empty() {
        return Ok(None);
    }

    let value: f64 = cleaned
        .parse()
        .map_err(|_| ValidationError::InvalidNumber { field })?;
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field });
    }
    Ok(Some(value))
}

/// Parse a whole number of years. Blank text yields `None`.
///
/// Accepts `"10"` and `"10.0"`; rejects `"2.5"`.
pub fn parse_years(field: &'static str, raw: &str) -> ValidationResult<Option<u32>> {
    let Some(value) = parse_amount(field, raw)? else {
        return Ok(None);
    };
    if value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(ValidationError::InvalidNumber { field });
    }
    Ok(Some(value as u32))
}
