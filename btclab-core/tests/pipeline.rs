//! End-to-end pipeline tests over CSV fixtures.

use std::io::Write;

use chrono::NaiveDate;

use btclab_core::data::{CleanError, LoadError};
use btclab_core::metrics::{mean_close_by_period, Period, SummaryStats};
use btclab_core::pipeline::{load_dataset, PipelineError};

fn write_csv(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// The three-day scenario from the analysis: newest-first in the file,
/// grouped separators in Volume and Market Cap.
fn three_day_fixture() -> tempfile::NamedTempFile {
    write_csv(
        "Date,Open,High,Low,Close,Volume,Market Cap\n\
         \"Apr 30, 2013\",110.00,112.00,98.00,99.00,\"11,155,800\",\"1,597,780,000\"\n\
         \"Apr 29, 2013\",100.50,111.00,100.00,110.00,\"21,056,800\",\"1,491,160,000\"\n\
         \"Apr 28, 2013\",99.00,101.00,98.50,100.00,\"1,234,567.89\",\"1,500,520,000\"\n",
    )
}

#[test]
fn end_to_end_three_day_scenario() {
    let file = three_day_fixture();
    let records = load_dataset(file.path()).unwrap();

    // Sorted strictly ascending despite newest-first file order.
    let dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2013, 4, 28).unwrap(),
            NaiveDate::from_ymd_opt(2013, 4, 29).unwrap(),
            NaiveDate::from_ymd_opt(2013, 4, 30).unwrap(),
        ]
    );

    // Grouped separators normalized.
    assert!((records[0].volume - 1_234_567.89).abs() < 1e-9);
    assert!((records[0].market_cap - 1_500_520_000.0).abs() < 1e-9);

    // Derived pct-change sequence: [undefined, +10%, -10%].
    assert_eq!(records[0].close_pct_change, None);
    assert!((records[1].close_pct_change.unwrap() - 10.0).abs() < 1e-9);
    assert!((records[2].close_pct_change.unwrap() + 10.0).abs() < 1e-9);

    // Yearly mean close: (100 + 110 + 99) / 3 = 103.0.
    let means = mean_close_by_period(&records, Period::Year);
    assert_eq!(means.len(), 1);
    assert_eq!(means[0].label, "2013");
    assert!((means[0].mean - 103.0).abs() < 1e-9);

    // Summary stats over the close column.
    let closes: Vec<f64> = records.iter().map(|r| r.close).collect();
    let stats = SummaryStats::compute(&closes).unwrap();
    assert_eq!(stats.count, 3);
    assert!((stats.mean - 103.0).abs() < 1e-9);
    assert_eq!(stats.min, 99.0);
    assert_eq!(stats.max, 110.0);
}

#[test]
fn missing_column_aborts_before_cleaning() {
    let file = write_csv(
        "Date,Open,High,Low,Close,Volume\n\
         \"Apr 28, 2013\",99.00,101.00,98.50,100.00,\"1,000\"\n",
    );
    let err = load_dataset(file.path()).unwrap_err();
    assert!(matches!(err, PipelineError::Load(LoadError::Schema(_))));
}

#[test]
fn dash_volume_aborts_the_run() {
    let file = write_csv(
        "Date,Open,High,Low,Close,Volume,Market Cap\n\
         \"Apr 28, 2013\",99.00,101.00,98.50,100.00,-,\"1,500,520,000\"\n",
    );
    let err = load_dataset(file.path()).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Clean(CleanError::NumberParse {
            column: "Volume",
            ..
        })
    ));
}

#[test]
fn duplicate_date_aborts_the_run() {
    let file = write_csv(
        "Date,Open,High,Low,Close,Volume,Market Cap\n\
         \"Apr 28, 2013\",99.00,101.00,98.50,100.00,\"1,000\",\"2,000\"\n\
         \"Apr 28, 2013\",99.00,101.00,98.50,105.00,\"1,000\",\"2,000\"\n",
    );
    let err = load_dataset(file.path()).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Clean(CleanError::DuplicateDates { .. })
    ));
}

#[test]
fn unparseable_date_aborts_the_run() {
    let file = write_csv(
        "Date,Open,High,Low,Close,Volume,Market Cap\n\
         \"Someday, 2013\",99.00,101.00,98.50,100.00,\"1,000\",\"2,000\"\n",
    );
    let err = load_dataset(file.path()).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Clean(CleanError::DateParse { row: 1, .. })
    ));
}
