//! Column — index over the six value columns of a PriceRecord.

use serde::{Deserialize, Serialize};

use super::PriceRecord;

/// A value column of the dataset, for per-column reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Column {
    Open,
    High,
    Low,
    Close,
    Volume,
    MarketCap,
}

/// The four price columns, in the order reports present them.
pub const PRICE_COLUMNS: [Column; 4] = [Column::Open, Column::High, Column::Low, Column::Close];

impl Column {
    pub fn index(self) -> usize {
        match self {
            Column::Open => 0,
            Column::High => 1,
            Column::Low => 2,
            Column::Close => 3,
            Column::Volume => 4,
            Column::MarketCap => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Column::Open),
            1 => Some(Column::High),
            2 => Some(Column::Low),
            3 => Some(Column::Close),
            4 => Some(Column::Volume),
            5 => Some(Column::MarketCap),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::Open => "Open",
            Column::High => "High",
            Column::Low => "Low",
            Column::Close => "Close",
            Column::Volume => "Volume",
            Column::MarketCap => "Market Cap",
        }
    }

    /// Read this column's value from a record.
    pub fn value_of(self, rec: &PriceRecord) -> f64 {
        match self {
            Column::Open => rec.open,
            Column::High => rec.high,
            Column::Low => rec.low,
            Column::Close => rec.close,
            Column::Volume => rec.volume,
            Column::MarketCap => rec.market_cap,
        }
    }

    /// Extract this column as a series, in record order.
    pub fn series(self, records: &[PriceRecord]) -> Vec<f64> {
        records.iter().map(|r| self.value_of(r)).collect()
    }

    pub fn next(self) -> Column {
        Column::from_index((self.index() + 1) % 6).unwrap()
    }

    pub fn prev(self) -> Column {
        Column::from_index((self.index() + 5) % 6).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec() -> PriceRecord {
        PriceRecord {
            date: NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
            open: 1.0,
            high: 2.0,
            low: 0.5,
            close: 1.5,
            volume: 100.0,
            market_cap: 200.0,
            close_pct_change: None,
        }
    }

    #[test]
    fn accessor_matches_field() {
        let r = rec();
        assert_eq!(Column::Open.value_of(&r), 1.0);
        assert_eq!(Column::High.value_of(&r), 2.0);
        assert_eq!(Column::Low.value_of(&r), 0.5);
        assert_eq!(Column::Close.value_of(&r), 1.5);
        assert_eq!(Column::Volume.value_of(&r), 100.0);
        assert_eq!(Column::MarketCap.value_of(&r), 200.0);
    }

    #[test]
    fn next_prev_cycle() {
        let mut col = Column::Open;
        for _ in 0..6 {
            col = col.next();
        }
        assert_eq!(col, Column::Open);
        assert_eq!(Column::Open.prev(), Column::MarketCap);
    }

    #[test]
    fn series_preserves_order() {
        let mut a = rec();
        let mut b = rec();
        a.close = 10.0;
        b.close = 20.0;
        let series = Column::Close.series(&[a, b]);
        assert_eq!(series, vec![10.0, 20.0]);
    }
}
