//! PriceRecord — the fundamental unit of the dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of Bitcoin market data, in USD.
///
/// `close_pct_change` is derived after cleaning: percentage change of
/// `close` against the chronologically preceding record, `None` for the
/// first record in sorted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub market_cap: f64,
    #[serde(default)]
    pub close_pct_change: Option<f64>,
}

impl PriceRecord {
    /// Returns true if any numeric field is NaN or infinite.
    pub fn has_non_finite(&self) -> bool {
        !(self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
            && self.volume.is_finite()
            && self.market_cap.is_finite())
    }

    /// OHLC range sanity: low <= open, close <= high, nothing negative.
    ///
    /// Valid market data satisfies this; a violation is reported as an
    /// anomaly by the cleaner, not repaired.
    pub fn is_sane(&self) -> bool {
        if self.has_non_finite() {
            return false;
        }
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
            && self.low >= 0.0
            && self.volume >= 0.0
            && self.market_cap >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> PriceRecord {
        PriceRecord {
            date: NaiveDate::from_ymd_opt(2013, 4, 28).unwrap(),
            open: 135.3,
            high: 135.98,
            low: 132.1,
            close: 134.21,
            volume: 0.0,
            market_cap: 1_500_520_000.0,
            close_pct_change: None,
        }
    }

    #[test]
    fn record_is_sane() {
        assert!(sample_record().is_sane());
    }

    #[test]
    fn record_detects_non_finite() {
        let mut rec = sample_record();
        rec.close = f64::NAN;
        assert!(rec.has_non_finite());
        assert!(!rec.is_sane());
    }

    #[test]
    fn record_detects_inverted_range() {
        let mut rec = sample_record();
        rec.high = 131.0; // below low
        assert!(!rec.is_sane());
    }

    #[test]
    fn record_detects_close_above_high() {
        let mut rec = sample_record();
        rec.close = 140.0;
        assert!(!rec.is_sane());
    }

    #[test]
    fn record_serialization_roundtrip() {
        let mut rec = sample_record();
        rec.close_pct_change = Some(-3.2);
        let json = serde_json::to_string(&rec).unwrap();
        let deser: PriceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(rec, deser);
    }
}
