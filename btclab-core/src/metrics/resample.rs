//! Calendar resampling — mean closing price per year/quarter/month.
//!
//! Records are partitioned by the calendar period containing their date;
//! each non-empty bucket yields one aggregate point, in chronological
//! order. Empty periods simply do not appear.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::PriceRecord;

/// Calendar bucket size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Year,
    Quarter,
    Month,
}

impl Period {
    pub fn label(self) -> &'static str {
        match self {
            Period::Year => "yearly",
            Period::Quarter => "quarterly",
            Period::Month => "monthly",
        }
    }

    /// Cycle year → quarter → month → year (TUI `p` key).
    pub fn next(self) -> Period {
        match self {
            Period::Year => Period::Quarter,
            Period::Quarter => Period::Month,
            Period::Month => Period::Year,
        }
    }

    /// The bucket key for a date at this period size.
    fn bucket_of(self, date: NaiveDate) -> Bucket {
        match self {
            Period::Year => Bucket {
                year: date.year(),
                sub: 0,
            },
            Period::Quarter => Bucket {
                year: date.year(),
                sub: (date.month0() / 3) + 1,
            },
            Period::Month => Bucket {
                year: date.year(),
                sub: date.month(),
            },
        }
    }
}

/// A calendar bucket: year plus quarter/month index (0 for yearly).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Bucket {
    year: i32,
    sub: u32,
}

impl Bucket {
    fn label(self, period: Period) -> String {
        match period {
            Period::Year => format!("{}", self.year),
            Period::Quarter => format!("{}Q{}", self.year, self.sub),
            Period::Month => format!("{}-{:02}", self.year, self.sub),
        }
    }

    fn start_date(self, period: Period) -> NaiveDate {
        let month = match period {
            Period::Year => 1,
            Period::Quarter => (self.sub - 1) * 3 + 1,
            Period::Month => self.sub,
        };
        // sub is always a valid quarter/month index by construction.
        NaiveDate::from_ymd_opt(self.year, month, 1).expect("valid bucket start")
    }
}

/// Mean closing price for one non-empty calendar period.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodMean {
    /// Human label: "2013", "2013Q2", or "2013-04".
    pub label: String,
    /// First calendar day of the period.
    pub start: NaiveDate,
    pub mean: f64,
    pub count: usize,
}

/// Aggregate mean closes per calendar period, chronologically.
///
/// Requires records sorted ascending by date (the cleaner's postcondition),
/// so records of one bucket are adjacent and a single pass suffices.
pub fn mean_close_by_period(records: &[PriceRecord], period: Period) -> Vec<PeriodMean> {
    let mut result: Vec<PeriodMean> = Vec::new();
    let mut current: Option<(Bucket, f64, usize)> = None;

    for rec in records {
        let bucket = period.bucket_of(rec.date);
        match current.as_mut() {
            Some((cur, sum, count)) if *cur == bucket => {
                *sum += rec.close;
                *count += 1;
            }
            _ => {
                if let Some((cur, sum, count)) = current.take() {
                    result.push(PeriodMean {
                        label: cur.label(period),
                        start: cur.start_date(period),
                        mean: sum / count as f64,
                        count,
                    });
                }
                current = Some((bucket, rec.close, 1));
            }
        }
    }

    if let Some((cur, sum, count)) = current {
        result.push(PeriodMean {
            label: cur.label(period),
            start: cur.start_date(period),
            mean: sum / count as f64,
            count,
        });
    }

    result
}
