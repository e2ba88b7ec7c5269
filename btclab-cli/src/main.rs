//! BtcLab CLI — textual reports over the historical price dataset.
//!
//! Commands:
//! - `check` — run loader + cleaner, report validation result and anomalies
//! - `summary` — descriptive statistics per column
//! - `resample` — mean closing price per year/quarter/month
//! - `changes` — daily percentage-change digest

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use btclab_core::config::ReportConfig;
use btclab_core::data::{clean, detect_anomalies, load_csv, Severity};
use btclab_core::domain::{Column, PriceRecord, PRICE_COLUMNS};
use btclab_core::metrics::{mean_close_by_period, Period, SummaryStats};
use btclab_core::pipeline::load_dataset;

#[derive(Parser)]
#[command(
    name = "btclab",
    about = "BtcLab — exploratory analysis of historical Bitcoin daily prices"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the dataset: schema, parses, ordering, duplicates, anomalies.
    Check {
        /// Path to the source CSV.
        #[arg(long, default_value = "bitcoin_price.csv")]
        csv: PathBuf,
    },
    /// Descriptive statistics (min/max/mean/std/quartiles) per column.
    Summary {
        /// Path to the source CSV.
        #[arg(long, default_value = "bitcoin_price.csv")]
        csv: PathBuf,

        /// Include Volume and Market Cap alongside the OHLC columns.
        #[arg(long, default_value_t = false)]
        all_columns: bool,
    },
    /// Mean closing price per calendar period.
    Resample {
        /// Path to the source CSV.
        #[arg(long, default_value = "bitcoin_price.csv")]
        csv: PathBuf,

        /// Bucket size: year, quarter, or month.
        #[arg(long, default_value = "year")]
        period: String,
    },
    /// Daily percentage-change digest with best and worst days.
    Changes {
        /// Path to the source CSV.
        #[arg(long, default_value = "bitcoin_price.csv")]
        csv: PathBuf,

        /// How many best/worst days to list.
        #[arg(long, default_value_t = 5)]
        top: usize,
    },
    /// Run `summary` and `resample` as configured by a TOML file.
    Report {
        /// Path to a report config (csv_path, candle_window, period).
        #[arg(long)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Check { csv } => run_check(&csv),
        Commands::Summary { csv, all_columns } => run_summary(&csv, all_columns),
        Commands::Resample { csv, period } => run_resample(&csv, parse_period(&period)?),
        Commands::Changes { csv, top } => run_changes(&csv, top),
        Commands::Report { config } => run_report(&config),
    }
}

fn parse_period(name: &str) -> Result<Period> {
    match name {
        "year" => Ok(Period::Year),
        "quarter" => Ok(Period::Quarter),
        "month" => Ok(Period::Month),
        _ => bail!("unknown period '{name}'. Valid: year, quarter, month"),
    }
}

fn run_check(csv: &PathBuf) -> Result<()> {
    let raw = load_csv(csv)?;
    let row_count = raw.len();
    let records = clean(raw)?;

    println!("=== Dataset Check ===");
    println!("File:           {}", csv.display());
    println!("Rows:           {row_count}");
    println!(
        "Date range:     {} to {}",
        records.first().map(|r| r.date.to_string()).unwrap_or_default(),
        records.last().map(|r| r.date.to_string()).unwrap_or_default()
    );
    println!("Ordering:       strict ascending by date");
    println!("Nulls:          0");
    println!("Duplicates:     0");

    let anomalies = detect_anomalies(&records);
    if anomalies.is_empty() {
        println!("Anomalies:      none");
    } else {
        println!("Anomalies:");
        for anomaly in &anomalies {
            let tag = match anomaly.severity {
                Severity::Info => "info",
                Severity::Warning => "warn",
                Severity::Error => "ERROR",
            };
            println!(
                "  [{tag}] {} x{}",
                anomaly.anomaly_type.label(),
                anomaly.count
            );
        }
    }

    Ok(())
}

fn run_summary(csv: &PathBuf, all_columns: bool) -> Result<()> {
    let records = load_dataset(csv)?;

    let mut columns: Vec<Column> = PRICE_COLUMNS.to_vec();
    if all_columns {
        columns.push(Column::Volume);
        columns.push(Column::MarketCap);
    }

    println!("=== Summary ({} records) ===", records.len());
    if let (Some(first), Some(last)) = (records.first(), records.last()) {
        println!("{} to {}", first.date, last.date);
    }
    println!(
        "{:<11} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "Column", "Mean", "Std", "Min", "25%", "Median", "75%", "Max"
    );
    println!("{}", "-".repeat(102));
    for column in columns {
        let series = column.series(&records);
        if let Some(stats) = SummaryStats::compute(&series) {
            println!(
                "{:<11} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
                column.label(),
                stats.mean,
                stats.std,
                stats.min,
                stats.q1,
                stats.median,
                stats.q3,
                stats.max
            );
        }
    }

    Ok(())
}

fn run_resample(csv: &PathBuf, period: Period) -> Result<()> {
    let records = load_dataset(csv)?;
    let means = mean_close_by_period(&records, period);

    println!("=== Mean close, {} ===", period.label());
    println!("{:<10} {:>12} {:>8}", "Period", "Mean", "Days");
    println!("{}", "-".repeat(32));
    for bucket in &means {
        println!("{:<10} {:>12.2} {:>8}", bucket.label, bucket.mean, bucket.count);
    }

    Ok(())
}

fn run_changes(csv: &PathBuf, top: usize) -> Result<()> {
    let records = load_dataset(csv)?;

    let mut changes: Vec<(&PriceRecord, f64)> = records
        .iter()
        .filter_map(|r| r.close_pct_change.map(|c| (r, c)))
        .collect();

    let values: Vec<f64> = changes.iter().map(|(_, c)| *c).collect();
    let Some(stats) = SummaryStats::compute(&values) else {
        bail!("dataset has fewer than two records; no daily changes to report");
    };

    println!("=== Daily close change ===");
    println!("Days:           {}", stats.count);
    println!("Mean:           {:+.2}%", stats.mean);
    println!("Std:            {:.2}%", stats.std);
    println!("Median:         {:+.2}%", stats.median);

    changes.sort_by(|a, b| b.1.total_cmp(&a.1));
    println!();
    println!("Best {top} days:");
    for (rec, change) in changes.iter().take(top) {
        println!("  {}  {:+7.2}%  close {:.2}", rec.date, change, rec.close);
    }
    println!("Worst {top} days:");
    for (rec, change) in changes.iter().rev().take(top) {
        println!("  {}  {:+7.2}%  close {:.2}", rec.date, change, rec.close);
    }

    Ok(())
}

fn run_report(config_path: &PathBuf) -> Result<()> {
    let config = ReportConfig::from_file(config_path)?;
    log::info!("report config: {config:?}");

    run_summary(&config.csv_path, true)?;
    println!();
    run_resample(&config.csv_path, config.period)?;
    Ok(())
}
