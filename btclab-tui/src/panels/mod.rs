//! Chart and table panels.

pub mod candles;
pub mod changes;
pub mod closes;
pub mod overview;
pub mod resample;
pub mod series;

use btclab_core::domain::PriceRecord;
use ratatui::text::Span;

/// Padded Y-axis bounds for a series.
fn padded_bounds(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    let pad = if range > 0.0 { range * 0.05 } else { 1.0 };
    (min - pad, max + pad)
}

/// Three X-axis labels: first date, middle date, last date.
fn date_labels(records: &[PriceRecord]) -> Vec<Span<'static>> {
    if records.is_empty() {
        return vec![Span::raw("")];
    }
    let first = records[0].date;
    let mid = records[records.len() / 2].date;
    let last = records[records.len() - 1].date;
    vec![
        Span::raw(first.format("%Y-%m").to_string()),
        Span::raw(mid.format("%Y-%m").to_string()),
        Span::raw(last.format("%Y-%m").to_string()),
    ]
}

/// Three Y-axis labels for a bounds pair.
fn value_labels(lower: f64, upper: f64) -> Vec<Span<'static>> {
    let mid = (lower + upper) / 2.0;
    vec![
        Span::raw(format_value(lower)),
        Span::raw(format_value(mid)),
        Span::raw(format_value(upper)),
    ]
}

/// Compact value formatting: large magnitudes get k/M/B suffixes.
fn format_value(v: f64) -> String {
    let abs = v.abs();
    if abs >= 1e9 {
        format!("{:.1}B", v / 1e9)
    } else if abs >= 1e6 {
        format!("{:.1}M", v / 1e6)
    } else if abs >= 1e4 {
        format!("{:.0}k", v / 1e3)
    } else {
        format!("{v:.1}")
    }
}
