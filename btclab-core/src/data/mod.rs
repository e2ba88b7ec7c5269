//! Data layer: CSV loading, header validation, cleaning/normalization.

pub mod clean;
pub mod loader;
pub mod schema;

pub use clean::{clean, detect_anomalies, AnomalyReport, AnomalyType, CleanError, Severity};
pub use loader::{load_csv, LoadError, RawRecord};
pub use schema::{SchemaError, REQUIRED_COLUMNS};
