//! BtcLab Core — data pipeline for the historical Bitcoin price dataset.
//!
//! The pipeline is a single forward pass over one in-memory table:
//! - Loader: CSV file → raw rows with textual Date/Volume/Market Cap
//! - Cleaner: parse, sort chronologically, hard validation gate
//! - Metrics deriver: daily close pct-change, per-period mean closes,
//!   log-scale transform, summary statistics
//!
//! Nothing here renders; the CLI and TUI crates consume the cleaned record
//! set read-only. Validation failure is a typed error, never a log line, so
//! no downstream statistic can be computed over an unvalidated dataset.

pub mod config;
pub mod data;
pub mod domain;
pub mod metrics;
pub mod pipeline;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: pipeline types are Send + Sync.
    ///
    /// The TUI loads the dataset on the main thread today; this keeps the
    /// door open without a retrofit if rendering and loading ever split.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::PriceRecord>();
        require_sync::<domain::PriceRecord>();
        require_send::<domain::Column>();
        require_sync::<domain::Column>();

        require_send::<data::RawRecord>();
        require_sync::<data::RawRecord>();
        require_send::<data::AnomalyReport>();
        require_sync::<data::AnomalyReport>();

        require_send::<metrics::SummaryStats>();
        require_sync::<metrics::SummaryStats>();
        require_send::<metrics::Period>();
        require_sync::<metrics::Period>();
        require_send::<metrics::PeriodMean>();
        require_sync::<metrics::PeriodMean>();

        require_send::<config::ReportConfig>();
        require_sync::<config::ReportConfig>();

        require_send::<pipeline::PipelineError>();
        require_sync::<pipeline::PipelineError>();
    }
}
