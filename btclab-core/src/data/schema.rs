//! Expected header schema for the source CSV.

use csv::StringRecord;

/// Columns the source file must carry, as spelled in its header row.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Date",
    "Open",
    "High",
    "Low",
    "Close",
    "Volume",
    "Market Cap",
];

/// Validate a header row against the required column set.
///
/// Extra columns are tolerated; a missing required column is fatal.
pub fn validate_headers(headers: &StringRecord) -> Result<(), SchemaError> {
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h.trim() == required) {
            return Err(SchemaError::MissingColumn(required.to_string()));
        }
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("missing required column: {0}")]
    MissingColumn(String),
}
