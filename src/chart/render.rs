//! Two-line projection chart drawn into an off-screen ratatui buffer

use super::AxisScale;
use crate::projection::ProjectionResult;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Style},
    symbols,
    widgets::{Axis, Chart, Dataset, GraphType, LegendPosition, Widget},
};

pub const WITHOUT_INTEREST_LABEL: &str = "Value without interest";
pub const WITH_INTEREST_LABEL: &str = "Value with interest";

/// Shown in place of the chart when values overflowed to infinity
pub const UNSCALABLE_MESSAGE: &str = "Chart unavailable: values are too large to plot.";

/// Render both series as a line chart and return the buffer as text.
///
/// Returns an empty string when either dimension is zero, and
/// [`UNSCALABLE_MESSAGE`] when the series cannot be put on an axis.
pub fn render_chart(result: &ProjectionResult, width: u16, height: u16) -> String {
    if width == 0 || height == 0 {
        return String::new();
    }

    let scale = AxisScale::from_series(&result.series);
    if !scale.is_finite() {
        return format!("{}\n", UNSCALABLE_MESSAGE);
    }

    let without: Vec<(f64, f64)> = result
        .series
        .iter()
        .map(|p| (p.year as f64, p.value_without_interest))
        .collect();
    let with: Vec<(f64, f64)> = result
        .series
        .iter()
        .map(|p| (p.year as f64, p.value_with_interest))
        .collect();

    let last_year = result.series.last().map_or(0, |p| p.year);
    // A zero-height domain draws nothing, so keep at least one interval
    let y_max = scale.upper_bound().max(scale.interval as f64);
    let x_max = f64::from(last_year.max(1));

    let datasets = vec![
        Dataset::default()
            .name(WITHOUT_INTEREST_LABEL)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Rgb(0x88, 0x84, 0xd8)))
            .data(&without),
        Dataset::default()
            .name(WITH_INTEREST_LABEL)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Rgb(0x82, 0xca, 0x9d)))
            .data(&with),
    ];

    // One label per two rows at most
    let max_labels = usize::from(height / 2).max(2);
    let y_labels: Vec<String> = if scale.upper_bound() == 0.0 {
        vec![AxisScale::tick_label(0.0), AxisScale::tick_label(y_max)]
    } else {
        scale
            .thinned_ticks(max_labels)
            .into_iter()
            .map(AxisScale::tick_label)
            .collect()
    };

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title("Years")
                .bounds([0.0, x_max])
                .labels(vec!["0".to_string(), last_year.to_string()]),
        )
        .y_axis(
            Axis::default()
                .title("Amount ($)")
                .bounds([0.0, y_max])
                .labels(y_labels),
        )
        .legend_position(Some(LegendPosition::Bottom))
        .hidden_legend_constraints((Constraint::Percentage(50), Constraint::Percentage(50)));

    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    chart.render(area, &mut buf);

    buffer_to_string(&buf, area)
}

fn buffer_to_string(buf: &Buffer, area: Rect) -> String {
    let mut out = String::with_capacity(area.area() as usize + area.height as usize);
    for y in area.top()..area.bottom() {
        let mut line = String::with_capacity(area.width as usize);
        for x in area.left()..area.right() {
            line.push_str(buf[(x, y)].symbol());
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
