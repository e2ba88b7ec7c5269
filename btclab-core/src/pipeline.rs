//! Pipeline orchestration: load → clean → derive, one pass, no recovery.

use std::path::Path;

use crate::data::clean::{clean, detect_anomalies, CleanError};
use crate::data::loader::{load_csv, LoadError};
use crate::domain::PriceRecord;
use crate::metrics::apply_close_pct_change;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Clean(#[from] CleanError),
}

/// Run the full pipeline over the source file.
///
/// On success the records are sorted strictly ascending by date, fully
/// validated, and carry the derived `close_pct_change`. Any failure is
/// terminal for the run. Anomalies (range violations, zero-volume days)
/// are logged as warnings but do not fail the pipeline.
pub fn load_dataset(path: &Path) -> Result<Vec<PriceRecord>, PipelineError> {
    let raw = load_csv(path)?;
    let mut records = clean(raw)?;

    for anomaly in detect_anomalies(&records) {
        log::warn!(
            "data quality: {} x{} ({:?})",
            anomaly.anomaly_type.label(),
            anomaly.count,
            anomaly.severity
        );
    }

    apply_close_pct_change(&mut records);

    if let (Some(first), Some(last)) = (records.first(), records.last()) {
        log::info!(
            "dataset ready: {} records, {} to {}",
            records.len(),
            first.date,
            last.date
        );
    }

    Ok(records)
}
