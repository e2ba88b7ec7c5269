//! Metrics — pure functions over the cleaned record set.
//!
//! Every metric is a pure function: series in, numbers out. Nothing here
//! mutates the dataset except `apply_close_pct_change`, which fills the one
//! derived field on the records themselves.

pub mod pct_change;
pub mod resample;
pub mod transform;

pub use pct_change::{apply_close_pct_change, close_pct_change};
pub use resample::{mean_close_by_period, Period, PeriodMean};
pub use transform::{log1p, log1p_series};

use serde::{Deserialize, Serialize};

/// Descriptive statistics for one column, describe()-style.
///
/// `std` is the sample standard deviation (n - 1 denominator); quartiles
/// use linear interpolation between order statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl SummaryStats {
    /// Compute all statistics for a series. Returns None for an empty one.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        Some(Self {
            count: values.len(),
            mean: mean(values),
            std: sample_std(values),
            min: sorted[0],
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }
}

/// Arithmetic mean. 0.0 for an empty series.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1). 0.0 for fewer than two values.
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    var.sqrt()
}

/// Quantile of a sorted series via linear interpolation.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!((0.0..=1.0).contains(&q));
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn mean_and_std_basic() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_approx(mean(&values), 5.0);
        // Sample variance of this series is 32/7.
        assert_approx(sample_std(&values), (32.0f64 / 7.0).sqrt());
    }

    #[test]
    fn std_of_singleton_is_zero() {
        assert_eq!(sample_std(&[42.0]), 0.0);
    }

    #[test]
    fn quantile_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_approx(quantile(&sorted, 0.0), 1.0);
        assert_approx(quantile(&sorted, 0.5), 2.5);
        assert_approx(quantile(&sorted, 0.25), 1.75);
        assert_approx(quantile(&sorted, 1.0), 4.0);
    }

    #[test]
    fn summary_stats_on_known_series() {
        let stats = SummaryStats::compute(&[100.0, 110.0, 99.0]).unwrap();
        assert_eq!(stats.count, 3);
        assert_approx(stats.mean, 103.0);
        assert_approx(stats.min, 99.0);
        assert_approx(stats.median, 100.0);
        assert_approx(stats.max, 110.0);
        assert_approx(stats.q1, 99.5);
        assert_approx(stats.q3, 105.0);
    }

    #[test]
    fn summary_stats_empty_is_none() {
        assert!(SummaryStats::compute(&[]).is_none());
    }
}
