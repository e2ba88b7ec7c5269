//! Panel 3 — Candles: OHLC candlestick chart over the first N days.
//!
//! Direct buffer rendering: one candle per terminal column, block-char
//! body colored by direction, `|` wicks to the high/low extremes.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::Frame;

use btclab_core::domain::PriceRecord;

use crate::app::AppState;
use crate::theme::{self, THEME};

/// Map a price to a Y offset in the plot area (0 = top).
fn price_to_y(price: f64, y_min: f64, y_max: f64, plot_height: u16) -> u16 {
    if (y_max - y_min).abs() < 1e-9 || plot_height == 0 {
        return 0;
    }
    let frac = (price - y_min) / (y_max - y_min);
    let y = plot_height.saturating_sub(1) as f64 * (1.0 - frac);
    y.round().max(0.0).min(plot_height.saturating_sub(1) as f64) as u16
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let bars: &[PriceRecord] = app.candle_slice();
    let buf = f.buffer_mut();

    if bars.is_empty() || area.width < 12 || area.height < 4 {
        return;
    }

    let y_min = bars.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
    let y_max = bars.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
    let range = y_max - y_min;
    let pad = if range > 0.0 { range * 0.05 } else { 1.0 };
    let y_lower = y_min - pad;
    let y_upper = y_max + pad;

    let up_count = bars.iter().filter(|b| b.close >= b.open).count();
    let down_count = bars.len() - up_count;

    // Header row, plot, footer row.
    let title = format!(
        " first {} days | {} up {} down ",
        bars.len(),
        up_count,
        down_count
    );
    buf.set_string(area.x, area.y, &title, theme::accent_bold());

    let label_width: u16 = 8;
    let plot_left = area.x + label_width;
    let plot_top = area.y + 1;
    let plot_width = area.width.saturating_sub(label_width);
    let plot_height = area.height.saturating_sub(2);

    if plot_width == 0 || plot_height == 0 {
        return;
    }

    // Y-axis labels at top/middle/bottom of the plot.
    let y_labels = [y_upper, (y_upper + y_lower) / 2.0, y_lower];
    let y_positions = [0u16, plot_height / 2, plot_height.saturating_sub(1)];
    for (label_val, y_pos) in y_labels.iter().zip(y_positions.iter()) {
        let label = format!("{label_val:>7.1}");
        buf.set_string(area.x, plot_top + y_pos, &label, theme::muted());
    }

    // One candle per column; when the window is wider than the plot,
    // show the chronological prefix that fits.
    let bars_to_draw = bars.len().min(plot_width as usize);

    for (i, bar) in bars[..bars_to_draw].iter().enumerate() {
        let x = plot_left + i as u16;
        if x >= area.right() {
            break;
        }

        let is_up = bar.close >= bar.open;
        let color = if is_up { THEME.positive } else { THEME.negative };
        let style = Style::default().fg(color);

        let high_y = price_to_y(bar.high, y_lower, y_upper, plot_height);
        let low_y = price_to_y(bar.low, y_lower, y_upper, plot_height);
        let body_top_y = price_to_y(bar.open.max(bar.close), y_lower, y_upper, plot_height);
        let body_bot_y = price_to_y(bar.open.min(bar.close), y_lower, y_upper, plot_height);

        // Upper wick.
        for y in high_y..body_top_y {
            buf.set_string(x, plot_top + y, "|", style);
        }

        // Body: full block up, medium shade down.
        let body_char = if is_up { "\u{2588}" } else { "\u{2593}" };
        for y in body_top_y..=body_bot_y {
            buf.set_string(x, plot_top + y, body_char, style);
        }

        // Lower wick.
        for y in (body_bot_y + 1)..=low_y {
            buf.set_string(x, plot_top + y, "|", style);
        }
    }

    // Footer: date range of the drawn slice plus key hints.
    let info_y = plot_top + plot_height;
    if info_y < area.bottom() {
        let info = format!(
            "{} to {} | +/-: window  0: reset",
            bars[0].date,
            bars[bars_to_draw - 1].date
        );
        buf.set_string(plot_left, info_y, &info, theme::muted());
    }
}
