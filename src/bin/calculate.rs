//! Compound interest calculator
//!
//! Projects a principal plus periodic deposits and prints the totals with a
//! chart of value with and without interest, or the series as JSON/CSV.

use anyhow::{Context, Result};
use clap::Parser;
use nora::chart::render_chart;
use nora::config::CalculatorConfig;
use nora::form::ProjectionForm;
use nora::projection::Cadence;
use nora::report::{summary_lines, to_json, write_series_csv, OutputFormat};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nora")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "NORA - The Compound Interest Calculator")]
struct Cli {
    /// Principal amount (blank means 0)
    #[arg(short, long, default_value = "")]
    principal: String,

    /// Annual interest rate in percent
    #[arg(short, long, default_value = "")]
    rate: String,

    /// Time in whole years
    #[arg(short = 't', long, default_value = "")]
    years: String,

    /// Deposit made each deposit period
    #[arg(short, long, default_value = "")]
    deposit: String,

    /// Deposit cadence (yearly, monthly)
    #[arg(long)]
    deposit_cadence: Option<Cadence>,

    /// Compounding cadence (yearly, monthly)
    #[arg(long)]
    compound_cadence: Option<Cadence>,

    /// Set both cadences to monthly
    #[arg(long, conflicts_with_all = ["deposit_cadence", "compound_cadence"])]
    monthly: bool,

    /// Output format (text, json, csv)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip the chart in text output
    #[arg(long)]
    no_chart: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CalculatorConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => CalculatorConfig::default(),
    };
    log::debug!("Using config: {:?}", config);

    let (deposit_cadence, compound_cadence) = if cli.monthly {
        (Cadence::Monthly, Cadence::Monthly)
    } else {
        (
            cli.deposit_cadence.unwrap_or(config.deposit_cadence),
            cli.compound_cadence.unwrap_or(config.compound_cadence),
        )
    };

    let form = ProjectionForm {
        principal: cli.principal,
        rate: cli.rate,
        years: cli.years,
        deposit: cli.deposit,
        deposit_cadence,
        compound_cadence,
    };

    let result = form.calculate()?;

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    match cli.format.unwrap_or(config.output_format) {
        OutputFormat::Text => {
            for line in summary_lines(&result) {
                writeln!(out, "{}", line)?;
            }
            if config.show_chart && !cli.no_chart {
                writeln!(out)?;
                write!(
                    out,
                    "{}",
                    render_chart(&result, config.chart_width, config.chart_height)
                )?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", to_json(&result)?)?;
        }
        OutputFormat::Csv => {
            write_series_csv(&mut out, &result).context("Failed to write series CSV")?;
        }
    }

    out.flush()?;
    if let Some(path) = &cli.output {
        log::info!("Output written to {}", path.display());
    }
    Ok(())
}
