//! Daily percentage change of the closing price.
//!
//! pct[i] = (close[i] - close[i-1]) / close[i-1] * 100 in sorted order;
//! undefined for the first record (no prior close).

use crate::domain::PriceRecord;

/// Compute the pct-change series for already-sorted records.
///
/// `None` for the first record, for a zero previous close, and whenever
/// either close is non-finite.
pub fn close_pct_change(records: &[PriceRecord]) -> Vec<Option<f64>> {
    let mut result = vec![None; records.len()];

    for i in 1..records.len() {
        let prev = records[i - 1].close;
        let curr = records[i].close;
        if prev.is_finite() && curr.is_finite() && prev != 0.0 {
            result[i] = Some((curr - prev) / prev * 100.0);
        }
    }

    result
}

/// Fill `close_pct_change` on the records in place.
pub fn apply_close_pct_change(records: &mut [PriceRecord]) {
    let changes = close_pct_change(records);
    for (rec, change) in records.iter_mut().zip(changes) {
        rec.close_pct_change = change;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_records(closes: &[f64]) -> Vec<PriceRecord> {
        let base = NaiveDate::from_ymd_opt(2013, 4, 28).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PriceRecord {
                date: base + chrono::Days::new(i as u64),
                open: close,
                high: close,
                low: close,
                close,
                volume: 1.0,
                market_cap: 1.0,
                close_pct_change: None,
            })
            .collect()
    }

    #[test]
    fn first_record_is_undefined() {
        let records = make_records(&[100.0]);
        assert_eq!(close_pct_change(&records), vec![None]);
    }

    #[test]
    fn known_sequence() {
        // Closes 100, 110, 99 → [None, +10%, -10%].
        let records = make_records(&[100.0, 110.0, 99.0]);
        let changes = close_pct_change(&records);
        assert_eq!(changes[0], None);
        assert!((changes[1].unwrap() - 10.0).abs() < 1e-9);
        assert!((changes[2].unwrap() + 10.0).abs() < 1e-9);
    }

    #[test]
    fn zero_previous_close_is_undefined() {
        let records = make_records(&[0.0, 10.0]);
        assert_eq!(close_pct_change(&records)[1], None);
    }

    #[test]
    fn apply_fills_records() {
        let mut records = make_records(&[100.0, 110.0]);
        apply_close_pct_change(&mut records);
        assert_eq!(records[0].close_pct_change, None);
        assert!((records[1].close_pct_change.unwrap() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input() {
        assert!(close_pct_change(&[]).is_empty());
    }
}
