//! BtcLab TUI — terminal chart viewer for the price dataset.
//!
//! Six panels, one visible at a time:
//! 1. Overview — record count, date range, per-column summary statistics
//! 2. Series — line chart of any value column over time
//! 3. Candles — candlestick chart over the first N chronological days
//! 4. Close — closing price, linear and log scale side by side
//! 5. Resample — mean close per year/quarter/month
//! 6. Changes — daily percentage-change line chart

pub mod app;
pub mod input;
pub mod panels;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::AppState;

#[cfg(test)]
mod test_helpers;
