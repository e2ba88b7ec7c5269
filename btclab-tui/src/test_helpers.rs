//! Shared test fixtures: deterministic record sets and app state.

use chrono::NaiveDate;

use btclab_core::config::ReportConfig;
use btclab_core::domain::PriceRecord;
use btclab_core::metrics::apply_close_pct_change;

use crate::app::AppState;

/// A deterministic zig-zag price series starting 2013-04-28.
pub fn sample_records(n: usize) -> Vec<PriceRecord> {
    let base = NaiveDate::from_ymd_opt(2013, 4, 28).unwrap();
    let mut records: Vec<PriceRecord> = (0..n)
        .map(|i| {
            let drift = i as f64 * 2.0;
            let swing = if i % 2 == 0 { 5.0 } else { -3.0 };
            let close = 100.0 + drift + swing;
            let open = 100.0 + drift;
            PriceRecord {
                date: base + chrono::Days::new(i as u64),
                open,
                high: open.max(close) + 2.0,
                low: open.min(close) - 2.0,
                close,
                volume: 1_000_000.0 + i as f64,
                market_cap: 1_500_000_000.0 + i as f64,
                close_pct_change: None,
            }
        })
        .collect();
    apply_close_pct_change(&mut records);
    records
}

pub fn sample_state(n: usize) -> AppState {
    AppState::new(
        sample_records(n),
        &ReportConfig::for_csv("bitcoin_price.csv"),
        "bitcoin_price.csv".to_string(),
    )
}
