//! Result serialization for the command line front ends

use super::format_currency;
use crate::projection::ProjectionResult;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;

/// How a result is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Summary lines followed by a chart
    #[default]
    Text,
    Json,
    /// Year-by-year series
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "table" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unknown output format '{}' (expected text, json or csv)", other)),
        }
    }
}

/// "Total Amount" and "Total Interest" lines
pub fn summary_lines(result: &ProjectionResult) -> Vec<String> {
    vec![
        format!("Total Amount: {}", format_currency(result.total_amount)),
        format!("Total Interest: {}", format_currency(result.total_interest)),
    ]
}

/// Write the series as CSV with values rounded to cents.
pub fn write_series_csv<W: Write>(writer: W, result: &ProjectionResult) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Year", "ValueWithoutInterest", "ValueWithInterest"])?;
    for point in &result.series {
        wtr.write_record(&[
            point.year.to_string(),
            format!("{:.2}", point.value_without_interest),
            format!("{:.2}", point.value_with_interest),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn to_json(result: &ProjectionResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{project, Cadence, ProjectionInput};

    fn sample() -> ProjectionResult {
        project(&ProjectionInput {
            principal: 1000.0,
            annual_rate_percent: 10.0,
            years: 2,
            deposit_amount: 100.0,
            deposit_cadence: Cadence::Yearly,
            compound_cadence: Cadence::Yearly,
        })
        .unwrap()
    }

    #[test]
    fn test_summary_lines() {
        let lines = summary_lines(&sample());
        assert_eq!(lines, vec!["Total Amount: $1,420.00", "Total Interest: $220.00"]);
    }

    #[test]
    fn test_series_csv() {
        let mut buf = Vec::new();
        write_series_csv(&mut buf, &sample()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Year,ValueWithoutInterest,ValueWithInterest");
        assert_eq!(lines[1], "0,1000.00,1000.00");
        assert_eq!(lines[2], "1,1100.00,1200.00");
        assert_eq!(lines[3], "2,1200.00,1420.00");
    }

    #[test]
    fn test_json_fields() {
        let json = to_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["series"].as_array().unwrap().len(), 3);
        assert!(value["series"][0].get("value_with_interest").is_some());
        assert!(value.get("total_interest").is_some());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("CSV".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert_eq!("table".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
