//! Panel 5 — Resample: mean close per year / quarter / month as bars.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{BarChart, Block};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme::{self, THEME};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if app.period_means.is_empty() {
        return;
    }

    // u64 bar heights; sub-dollar means still get one unit so the bar
    // is visible at all.
    let data: Vec<(&str, u64)> = app
        .period_means
        .iter()
        .map(|pm| (pm.label.as_str(), (pm.mean.round() as u64).max(1)))
        .collect();

    let usable = area.width.saturating_sub(2).max(1);
    let per_bar = (usable / data.len().max(1) as u16).max(2);
    let bar_width = per_bar - 1;

    let title = format!(
        " mean close by {} | {} buckets | p: period ",
        app.period.label(),
        data.len()
    );

    let chart = BarChart::default()
        .block(Block::default().title(Span::styled(title, theme::accent_bold())))
        .data(&data)
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(THEME.accent))
        .value_style(theme::text())
        .label_style(theme::muted());

    f.render_widget(chart, area);
}
