//! End-to-end checks of the projection engine through the public API

use approx::assert_abs_diff_eq;
use nora::chart::AxisScale;
use nora::form::ProjectionForm;
use nora::report::summary_lines;
use nora::{project, Cadence, ProjectionInput, ValidationError};

fn input(rate: f64, years: u32, deposit: f64, cadence: Cadence) -> ProjectionInput {
    ProjectionInput {
        principal: 1000.0,
        annual_rate_percent: rate,
        years,
        deposit_amount: deposit,
        deposit_cadence: cadence,
        compound_cadence: cadence,
    }
}

#[test]
fn zero_rate_keeps_principal() {
    for cadence in [Cadence::Yearly, Cadence::Monthly] {
        let result = project(&input(0.0, 5, 0.0, cadence)).unwrap();
        assert_eq!(result.total_amount, 1000.0);
        assert_eq!(result.total_interest, 0.0);
    }
}

#[test]
fn monthly_compounding_matches_closed_form() {
    let result = project(&input(12.0, 1, 0.0, Cadence::Monthly)).unwrap();
    assert_abs_diff_eq!(result.total_amount, 1126.83, epsilon = 0.01);
}

#[test]
fn series_spans_every_year_and_grows() {
    for years in [0, 1, 7, 30] {
        for cadence in [Cadence::Yearly, Cadence::Monthly] {
            let result = project(&input(6.5, years, 25.0, cadence)).unwrap();
            assert_eq!(result.series.len(), years as usize + 1);
            assert_eq!(result.series[0].year, 0);
            for pair in result.series.windows(2) {
                assert_eq!(pair[1].year, pair[0].year + 1);
                assert!(pair[1].value_with_interest >= pair[0].value_with_interest);
            }
        }
    }
}

#[test]
fn mismatched_cadences_are_rejected() {
    let mut monthly_deposit = input(5.0, 10, 100.0, Cadence::Yearly);
    monthly_deposit.deposit_cadence = Cadence::Monthly;
    assert_eq!(
        project(&monthly_deposit).unwrap_err(),
        ValidationError::MonthlyDepositWithYearlyCompounding
    );

    let mut yearly_deposit = input(5.0, 10, 100.0, Cadence::Monthly);
    yearly_deposit.deposit_cadence = Cadence::Yearly;
    assert_eq!(
        project(&yearly_deposit).unwrap_err(),
        ValidationError::YearlyDepositWithMonthlyCompounding
    );
}

#[test]
fn repeated_projection_is_identical() {
    let request = input(3.75, 25, 80.0, Cadence::Monthly);
    assert_eq!(project(&request).unwrap(), project(&request).unwrap());
}

#[test]
fn form_to_report_and_scale() {
    let form = ProjectionForm {
        principal: "010000".to_string(),
        rate: "5".to_string(),
        years: "10".to_string(),
        deposit: "1000".to_string(),
        ..Default::default()
    };
    let result = form.calculate().unwrap();

    // 10000 * 1.05^10 + 1000 * (1.05^10 - 1) / 0.05
    let growth = 1.05_f64.powi(10);
    let expected = 10_000.0 * growth + 1000.0 * (growth - 1.0) / 0.05;
    assert_abs_diff_eq!(result.total_amount, expected, epsilon = 1e-6);

    let lines = summary_lines(&result);
    assert!(lines[0].starts_with("Total Amount: $28,"));

    let scale = AxisScale::from_series(&result.series);
    assert_eq!(scale.interval, 10_000);
    assert_eq!(scale.upper_bound(), 30_000.0);
    assert_eq!(scale.ticks(), vec![0.0, 10_000.0, 20_000.0, 30_000.0]);
}

#[test]
fn large_growth_reports_and_charts_without_overflow() {
    let result = project(&ProjectionInput {
        principal: 1000.0,
        annual_rate_percent: 100.0,
        years: 60,
        deposit_amount: 0.0,
        deposit_cadence: Cadence::Yearly,
        compound_cadence: Cadence::Yearly,
    })
    .unwrap();

    let lines = summary_lines(&result);
    assert_eq!(lines[0], "Total Amount: $1,152,921,504,606,846,976,000.00");

    let chart = nora::chart::render_chart(&result, 60, 16);
    assert_eq!(chart.lines().count(), 16);
}

#[test]
fn horizon_is_bounded() {
    let mut request = input(5.0, nora::projection::MAX_YEARS + 1, 10.0, Cadence::Monthly);
    assert!(matches!(
        project(&request),
        Err(ValidationError::TooManyYears { .. })
    ));
    request.years = nora::projection::MAX_YEARS;
    assert_eq!(project(&request).unwrap().series.len(), 1001);
}
