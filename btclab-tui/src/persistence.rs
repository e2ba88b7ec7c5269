//! UI state persistence — JSON save/load across restarts.
//!
//! Only view state is persisted (panel, column, period, window). Derived
//! data is always recomputed from the source file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use btclab_core::domain::Column;
use btclab_core::metrics::Period;

use crate::app::{AppState, Panel};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub active_panel: Panel,
    pub series_column: Column,
    pub period: Period,
    pub candle_window: usize,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            active_panel: Panel::Overview,
            series_column: Column::Close,
            period: Period::Year,
            candle_window: 100,
        }
    }
}

/// Load persisted state from disk. Returns defaults if missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        active_panel: app.active_panel,
        series_column: app.series_column,
        period: app.period,
        candle_window: app.candle_window,
    }
}

pub fn apply(app: &mut AppState, state: PersistedState) {
    app.active_panel = state.active_panel;
    app.series_column = state.series_column;
    if state.period != app.period {
        // Cycle until the cached means match the persisted period.
        while app.period != state.period {
            app.cycle_period();
        }
    }
    app.candle_window = state.candle_window.clamp(10, app.records.len().max(10));
    app.status_message = None;
}
