//! Cleaner/normalizer — parse, sort, and gate the raw rows.
//!
//! The validation gate is a typed error, not a repair: any unparseable
//! value, duplicate date/row, or non-finite field aborts the run before a
//! single statistic is computed downstream.

use chrono::NaiveDate;

use crate::data::loader::RawRecord;
use crate::domain::PriceRecord;

/// Date formats the source file is known to use, tried in order.
const DATE_FORMATS: [&str; 2] = ["%b %d, %Y", "%Y-%m-%d"];

#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    #[error("unparseable date at data row {row}: {value:?}")]
    DateParse { row: usize, value: String },

    #[error("unparseable number in column {column} at data row {row}: {value:?}")]
    NumberParse {
        column: &'static str,
        row: usize,
        value: String,
    },

    #[error("{} fully duplicate row(s) at dates {dates:?}", dates.len())]
    DuplicateRows { dates: Vec<NaiveDate> },

    #[error("{} duplicate date(s): {dates:?}", dates.len())]
    DuplicateDates { dates: Vec<NaiveDate> },

    #[error("non-finite value in column {column} on {date}")]
    NonFinite {
        column: &'static str,
        date: NaiveDate,
    },
}

/// Parse a textual calendar date in one of the known source formats.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value.trim(), fmt).ok())
}

/// Normalize a grouped numeric string ("1,234,567.89") into a number.
///
/// Only grouping commas are stripped; anything else that fails to parse as
/// a decimal is rejected.
pub fn parse_grouped_number(value: &str) -> Option<f64> {
    let stripped = value.trim().replace(',', "");
    if stripped.is_empty() {
        return None;
    }
    stripped.parse::<f64>().ok()
}

/// Parse, sort chronologically, and validate the raw rows.
///
/// On success the records are strictly ascending by date with no duplicate
/// rows and no non-finite values. `close_pct_change` is left unset; the
/// metrics deriver fills it. Data row numbers in errors are 1-based.
pub fn clean(rows: Vec<RawRecord>) -> Result<Vec<PriceRecord>, CleanError> {
    let mut records = Vec::with_capacity(rows.len());

    for (i, raw) in rows.into_iter().enumerate() {
        let row = i + 1;
        let date = parse_date(&raw.date).ok_or(CleanError::DateParse {
            row,
            value: raw.date.clone(),
        })?;
        let volume = parse_grouped_number(&raw.volume).ok_or(CleanError::NumberParse {
            column: "Volume",
            row,
            value: raw.volume.clone(),
        })?;
        let market_cap = parse_grouped_number(&raw.market_cap).ok_or(CleanError::NumberParse {
            column: "Market Cap",
            row,
            value: raw.market_cap.clone(),
        })?;

        records.push(PriceRecord {
            date,
            open: raw.open,
            high: raw.high,
            low: raw.low,
            close: raw.close,
            volume,
            market_cap,
            close_pct_change: None,
        });
    }

    records.sort_by_key(|r| r.date);

    // Duplicate detection after the sort: equal dates are now adjacent.
    let mut dup_rows = Vec::new();
    let mut dup_dates = Vec::new();
    for pair in records.windows(2) {
        if pair[0].date == pair[1].date {
            if pair[0] == pair[1] {
                dup_rows.push(pair[0].date);
            } else {
                dup_dates.push(pair[0].date);
            }
        }
    }
    if !dup_rows.is_empty() {
        return Err(CleanError::DuplicateRows { dates: dup_rows });
    }
    if !dup_dates.is_empty() {
        return Err(CleanError::DuplicateDates { dates: dup_dates });
    }

    for rec in &records {
        for (column, value) in [
            ("Open", rec.open),
            ("High", rec.high),
            ("Low", rec.low),
            ("Close", rec.close),
            ("Volume", rec.volume),
            ("Market Cap", rec.market_cap),
        ] {
            if !value.is_finite() {
                return Err(CleanError::NonFinite {
                    column,
                    date: rec.date,
                });
            }
        }
    }

    Ok(records)
}

/// Non-fatal data-quality findings over a cleaned record set.
#[derive(Debug)]
pub struct AnomalyReport {
    pub anomaly_type: AnomalyType,
    pub count: usize,
    pub severity: Severity,
}

#[derive(Debug, PartialEq, Eq)]
pub enum AnomalyType {
    /// high < low on a record.
    InvertedRange,
    /// open or close outside [low, high].
    RangeViolation,
    /// Zero traded volume (common in the earliest records).
    ZeroVolume,
}

impl AnomalyType {
    pub fn label(&self) -> &'static str {
        match self {
            AnomalyType::InvertedRange => "inverted high/low range",
            AnomalyType::RangeViolation => "open/close outside low..high",
            AnomalyType::ZeroVolume => "zero volume",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Detect OHLC range violations and zero-volume days.
///
/// These are observations about the dataset, reported but never repaired.
pub fn detect_anomalies(records: &[PriceRecord]) -> Vec<AnomalyReport> {
    let mut anomalies = Vec::new();

    let inverted = records.iter().filter(|r| r.high < r.low).count();
    if inverted > 0 {
        anomalies.push(AnomalyReport {
            anomaly_type: AnomalyType::InvertedRange,
            count: inverted,
            severity: Severity::Error,
        });
    }

    let out_of_range = records
        .iter()
        .filter(|r| {
            r.high >= r.low
                && (r.open < r.low || r.open > r.high || r.close < r.low || r.close > r.high)
        })
        .count();
    if out_of_range > 0 {
        anomalies.push(AnomalyReport {
            anomaly_type: AnomalyType::RangeViolation,
            count: out_of_range,
            severity: Severity::Warning,
        });
    }

    let zero_volume = records.iter().filter(|r| r.volume == 0.0).count();
    if zero_volume > 0 {
        anomalies.push(AnomalyReport {
            anomaly_type: AnomalyType::ZeroVolume,
            count: zero_volume,
            severity: Severity::Info,
        });
    }

    anomalies
}
