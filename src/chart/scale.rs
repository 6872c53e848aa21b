//! Value axis scaling for the projection chart
//!
//! Tick spacing widens with the largest compounded value so the axis never
//! carries more than a handful of labels:
//!
//! | max value      | interval |
//! |----------------|----------|
//! | <= 20,000      | 5,000    |
//! | <= 80,000      | 10,000   |
//! | above          | 20,000   |
//!
//! All tick arithmetic is done in `f64`; long horizons at high rates produce
//! values far beyond `u64::MAX`.

use crate::projection::YearPoint;

/// Upper limit on the number of ticks [`AxisScale::ticks`] returns
pub const MAX_TICKS: usize = 1_000;

/// Tick spacing for a given maximum value
pub fn tick_interval(max_value: f64) -> u64 {
    if max_value <= 20_000.0 {
        5_000
    } else if max_value <= 80_000.0 {
        10_000
    } else {
        20_000
    }
}

/// Value axis derived from a projection series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    /// Largest `value_with_interest` in the series
    pub max_value: f64,
    pub interval: u64,
    /// Number of intervals needed to reach `max_value`
    steps: f64,
}

impl AxisScale {
    pub fn from_max(max_value: f64) -> Self {
        let max_value = if max_value.is_nan() {
            f64::INFINITY
        } else {
            max_value.max(0.0)
        };
        let interval = tick_interval(max_value);
        let steps = (max_value / interval as f64).ceil();
        Self {
            max_value,
            interval,
            steps,
        }
    }

    /// Scale for a series; an empty series scales as if its max were 0.
    pub fn from_series(series: &[YearPoint]) -> Self {
        let max = series
            .iter()
            .map(|p| p.value_with_interest)
            .fold(0.0_f64, |acc, v| {
                if v.is_nan() {
                    f64::INFINITY
                } else {
                    acc.max(v)
                }
            });
        Self::from_max(max)
    }

    /// False when the series overflowed to infinity and cannot be scaled
    pub fn is_finite(&self) -> bool {
        self.max_value.is_finite()
    }

    /// Smallest multiple of the interval that is >= the max value
    pub fn upper_bound(&self) -> f64 {
        self.steps * self.interval as f64
    }

    /// Tick values `0, interval, 2*interval, ..., upper_bound`.
    ///
    /// Beyond [`MAX_TICKS`] ticks the list is thinned, see [`Self::thinned_ticks`].
    pub fn ticks(&self) -> Vec<f64> {
        self.thinned_ticks(MAX_TICKS)
    }

    /// At most `max_ticks` ticks (minimum 2) from 0 to `upper_bound`.
    ///
    /// Ticks step by a whole number of intervals; the last one is clamped to
    /// `upper_bound`. An unscalable axis yields just `[0]`.
    pub fn thinned_ticks(&self, max_ticks: usize) -> Vec<f64> {
        if !self.is_finite() || self.steps == 0.0 {
            return vec![0.0];
        }

        let max_ticks = max_ticks.max(2);
        let stride = (self.steps / (max_ticks - 1) as f64).ceil().max(1.0);
        let count = (self.steps / stride).ceil() as usize;
        let step = stride * self.interval as f64;
        let upper = self.upper_bound();

        (0..=count)
            .map(|i| {
                if i == count {
                    upper
                } else {
                    (i as f64 * step).min(upper)
                }
            })
            .collect()
    }

    /// Axis label in thousands ("25k")
    pub fn tick_label(value: f64) -> String {
        format!("{}k", value / 1000.0)
    }

    pub fn tick_labels(&self) -> Vec<String> {
        self.ticks().into_iter().map(Self::tick_label).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{project, ProjectionInput};

    fn point(year: u32, value: f64) -> YearPoint {
        YearPoint {
            year,
            value_without_interest: 0.0,
            value_with_interest: value,
        }
    }

    #[test]
    fn test_interval_thresholds() {
        assert_eq!(tick_interval(0.0), 5_000);
        assert_eq!(tick_interval(20_000.0), 5_000);
        assert_eq!(tick_interval(20_000.01), 10_000);
        assert_eq!(tick_interval(80_000.0), 10_000);
        assert_eq!(tick_interval(80_001.0), 20_000);
    }

    #[test]
    fn test_ticks_cover_max() {
        let scale = AxisScale::from_series(&[point(0, 1000.0), point(1, 12_345.0)]);
        assert_eq!(scale.interval, 5_000);
        assert_eq!(scale.ticks(), vec![0.0, 5_000.0, 10_000.0, 15_000.0]);
        assert_eq!(scale.upper_bound(), 15_000.0);

        let scale = AxisScale::from_max(60_000.0);
        assert_eq!(
            scale.ticks(),
            vec![0.0, 10_000.0, 20_000.0, 30_000.0, 40_000.0, 50_000.0, 60_000.0]
        );

        let scale = AxisScale::from_max(150_000.0);
        assert_eq!(scale.upper_bound(), 160_000.0);
        assert_eq!(scale.ticks().len(), 9);
    }

    #[test]
    fn test_empty_series() {
        let scale = AxisScale::from_series(&[]);
        assert_eq!(scale.ticks(), vec![0.0]);
        assert_eq!(scale.upper_bound(), 0.0);
        assert!(scale.is_finite());
    }

    #[test]
    fn test_max_beyond_u64_range() {
        // 1000 doubling every year for 60 years
        let result = project(&ProjectionInput {
            principal: 1000.0,
            annual_rate_percent: 100.0,
            years: 60,
            ..Default::default()
        })
        .unwrap();
        let scale = AxisScale::from_series(&result.series);
        assert!(scale.max_value > u64::MAX as f64);
        assert!(scale.upper_bound() >= scale.max_value);

        let ticks = scale.ticks();
        assert!(ticks.len() <= MAX_TICKS);
        assert_eq!(ticks[0], 0.0);
        assert_eq!(*ticks.last().unwrap(), scale.upper_bound());
        assert!(ticks.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_thinned_ticks() {
        let scale = AxisScale::from_max(1_000_000.0);
        assert_eq!(scale.ticks().len(), 51);

        let ticks = scale.thinned_ticks(6);
        assert_eq!(ticks, vec![0.0, 200_000.0, 400_000.0, 600_000.0, 800_000.0, 1_000_000.0]);
        assert_eq!(scale.thinned_ticks(0).len(), 2);
    }

    #[test]
    fn test_infinite_max() {
        let scale = AxisScale::from_series(&[point(0, 1.0), point(1, f64::INFINITY)]);
        assert!(!scale.is_finite());
        assert_eq!(scale.ticks(), vec![0.0]);

        assert!(!AxisScale::from_max(f64::NAN).is_finite());
    }

    #[test]
    fn test_tick_labels() {
        assert_eq!(AxisScale::tick_label(0.0), "0k");
        assert_eq!(AxisScale::tick_label(20_000.0), "20k");
        assert_eq!(AxisScale::tick_label(2_500.0), "2.5k");
        assert_eq!(AxisScale::from_max(9_000.0).tick_labels(), vec!["0k", "5k", "10k"]);
    }
}
