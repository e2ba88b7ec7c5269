//! Application state — single-owner, main-thread only.
//!
//! The dataset is loaded and validated before the terminal is set up; by
//! the time this state exists the records are clean, sorted, and carry the
//! derived pct-change. All panels read it immutably.

use serde::{Deserialize, Serialize};

use btclab_core::config::ReportConfig;
use btclab_core::data::{detect_anomalies, AnomalyReport};
use btclab_core::domain::{Column, PriceRecord};
use btclab_core::metrics::{mean_close_by_period, Period, PeriodMean};

/// Which panel is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    Overview,
    Series,
    Candles,
    Close,
    Resample,
    Changes,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Overview => 0,
            Panel::Series => 1,
            Panel::Candles => 2,
            Panel::Close => 3,
            Panel::Resample => 4,
            Panel::Changes => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Overview),
            1 => Some(Panel::Series),
            2 => Some(Panel::Candles),
            3 => Some(Panel::Close),
            4 => Some(Panel::Resample),
            5 => Some(Panel::Changes),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Overview => "Overview",
            Panel::Series => "Series",
            Panel::Candles => "Candles",
            Panel::Close => "Close",
            Panel::Resample => "Resample",
            Panel::Changes => "Changes",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 6).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 5) % 6).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

pub struct AppState {
    /// Cleaned, sorted, pct-change-augmented records. Read-only from here.
    pub records: Vec<PriceRecord>,
    pub anomalies: Vec<AnomalyReport>,
    /// Source file name, for panel titles.
    pub source_label: String,

    pub active_panel: Panel,
    pub series_column: Column,
    pub period: Period,
    /// Cached aggregate for the current period; recomputed on cycle.
    pub period_means: Vec<PeriodMean>,
    pub candle_window: usize,
    default_candle_window: usize,

    pub show_help: bool,
    pub status_message: Option<(String, StatusLevel)>,
    pub running: bool,
}

impl AppState {
    pub fn new(records: Vec<PriceRecord>, config: &ReportConfig, source_label: String) -> Self {
        let anomalies = detect_anomalies(&records);
        let period = config.period;
        let period_means = mean_close_by_period(&records, period);
        let default_candle_window = config.candle_window.max(1);
        let candle_window = default_candle_window.min(records.len().max(1));

        Self {
            records,
            anomalies,
            source_label,
            active_panel: Panel::Overview,
            series_column: Column::Close,
            period,
            period_means,
            candle_window,
            default_candle_window,
            show_help: false,
            status_message: None,
            running: true,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    /// The chronological prefix shown on the candle panel.
    pub fn candle_slice(&self) -> &[PriceRecord] {
        let n = self.candle_window.min(self.records.len());
        &self.records[..n]
    }

    pub fn cycle_column(&mut self, forward: bool) {
        self.series_column = if forward {
            self.series_column.next()
        } else {
            self.series_column.prev()
        };
        self.set_status(format!("Series: {}", self.series_column.label()));
    }

    pub fn cycle_period(&mut self) {
        self.period = self.period.next();
        self.period_means = mean_close_by_period(&self.records, self.period);
        self.set_status(format!(
            "Resample: {} ({} buckets)",
            self.period.label(),
            self.period_means.len()
        ));
    }

    pub fn grow_candle_window(&mut self) {
        self.candle_window = (self.candle_window + 10).min(self.records.len().max(1));
        self.set_status(format!("Candle window: {} days", self.candle_window));
    }

    pub fn shrink_candle_window(&mut self) {
        self.candle_window = self.candle_window.saturating_sub(10).max(10);
        self.set_status(format!("Candle window: {} days", self.candle_window));
    }

    pub fn reset_candle_window(&mut self) {
        self.candle_window = self.default_candle_window.min(self.records.len().max(1));
        self.set_status(format!("Candle window: {} days", self.candle_window));
    }
}
