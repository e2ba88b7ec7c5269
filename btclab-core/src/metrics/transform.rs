//! Log-scale transform for chart axes.
//!
//! ln(1 + x): monotonic in x and defined at x = 0, so a zero close cannot
//! blow up the axis. Purely presentational.

/// Natural log of (1 + value).
pub fn log1p(value: f64) -> f64 {
    value.ln_1p()
}

/// Transform a whole series.
pub fn log1p_series(values: &[f64]) -> Vec<f64> {
    values.iter().map(|&v| log1p(v)).collect()
}
