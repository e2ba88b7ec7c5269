//! Report configuration — optional TOML file shared by the CLI and TUI.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::metrics::Period;

fn default_candle_window() -> usize {
    100
}

/// Configuration for one analysis run.
///
/// ```toml
/// csv_path = "bitcoin_price.csv"
/// candle_window = 100
/// period = "quarter"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Path to the source CSV.
    pub csv_path: PathBuf,

    /// Number of chronologically-first records on the candlestick chart.
    #[serde(default = "default_candle_window")]
    pub candle_window: usize,

    /// Initial resampling period.
    #[serde(default)]
    pub period: Period,
}

impl ReportConfig {
    /// A config pointing at the given CSV with all defaults.
    pub fn for_csv(csv_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
            candle_window: default_candle_window(),
            period: Period::default(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
