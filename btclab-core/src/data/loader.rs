//! CSV loader — file → raw rows, fields left textual where the source is.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::data::schema::{validate_headers, SchemaError};

/// One row of the source file, before cleaning.
///
/// `Date`, `Volume`, and `Market Cap` are textual in the source (calendar
/// date and grouped numbers); OHLC columns are plain decimals. The cleaner
/// owns all parsing beyond this shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Open")]
    pub open: f64,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Low")]
    pub low: f64,
    #[serde(rename = "Close")]
    pub close: f64,
    #[serde(rename = "Volume")]
    pub volume: String,
    #[serde(rename = "Market Cap")]
    pub market_cap: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("CSV decode failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Read the source file into raw rows, in file order.
///
/// The header row is validated before any row is deserialized; a malformed
/// row is fatal (single-shot analysis, no skip-and-continue).
pub fn load_csv(path: &Path) -> Result<Vec<RawRecord>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    validate_headers(reader.headers()?)?;

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }

    log::info!("loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_rows_in_file_order() {
        let file = write_csv(
            "Date,Open,High,Low,Close,Volume,Market Cap\n\
             \"Apr 29, 2013\",134.44,147.49,134.00,144.54,\"21,056,800\",\"1,491,160,000\"\n\
             \"Apr 28, 2013\",135.30,135.98,132.10,134.21,-,\"1,500,520,000\"\n",
        );

        let rows = load_csv(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, "Apr 29, 2013");
        assert_eq!(rows[0].open, 134.44);
        assert_eq!(rows[0].volume, "21,056,800");
        assert_eq!(rows[1].volume, "-");
    }

    #[test]
    fn missing_column_is_fatal() {
        let file = write_csv(
            "Date,Open,High,Low,Close,Volume\n\
             \"Apr 28, 2013\",135.30,135.98,132.10,134.21,-\n",
        );

        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Schema(SchemaError::MissingColumn(ref c)) if c == "Market Cap"
        ));
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = load_csv(Path::new("/nonexistent/bitcoin_price.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }

    #[test]
    fn non_numeric_price_is_fatal() {
        let file = write_csv(
            "Date,Open,High,Low,Close,Volume,Market Cap\n\
             \"Apr 28, 2013\",abc,135.98,132.10,134.21,-,\"1,500,520,000\"\n",
        );

        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }
}
