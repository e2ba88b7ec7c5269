//! Panel 1 — Overview: dataset facts and per-column summary statistics.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use btclab_core::domain::{Column, PRICE_COLUMNS};
use btclab_core::metrics::SummaryStats;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Source:      ", theme::muted()),
        Span::styled(app.source_label.clone(), theme::text()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Records:     ", theme::muted()),
        Span::styled(app.records.len().to_string(), theme::text()),
    ]));
    if let (Some(first), Some(last)) = (app.records.first(), app.records.last()) {
        lines.push(Line::from(vec![
            Span::styled("Date range:  ", theme::muted()),
            Span::styled(format!("{} to {}", first.date, last.date), theme::text()),
        ]));
    }

    let anomaly_count: usize = app.anomalies.iter().map(|a| a.count).sum();
    let anomaly_text = if app.anomalies.is_empty() {
        "none".to_string()
    } else {
        app.anomalies
            .iter()
            .map(|a| format!("{} x{}", a.anomaly_type.label(), a.count))
            .collect::<Vec<_>>()
            .join(", ")
    };
    lines.push(Line::from(vec![
        Span::styled("Anomalies:   ", theme::muted()),
        Span::styled(
            anomaly_text,
            ratatui::style::Style::default().fg(theme::THEME.anomaly_color(anomaly_count)),
        ),
    ]));
    lines.push(Line::from(""));

    // Stats table over price columns plus volume and market cap.
    lines.push(Line::from(Span::styled(
        format!(
            "{:<11} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
            "Column", "Mean", "Std", "Min", "25%", "Median", "75%", "Max"
        ),
        theme::accent_bold(),
    )));

    let mut columns: Vec<Column> = PRICE_COLUMNS.to_vec();
    columns.push(Column::Volume);
    columns.push(Column::MarketCap);

    for column in columns {
        let series = column.series(&app.records);
        if let Some(stats) = SummaryStats::compute(&series) {
            lines.push(Line::from(Span::styled(
                format!(
                    "{:<11} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
                    column.label(),
                    super::format_value(stats.mean),
                    super::format_value(stats.std),
                    super::format_value(stats.min),
                    super::format_value(stats.q1),
                    super::format_value(stats.median),
                    super::format_value(stats.q3),
                    super::format_value(stats.max),
                ),
                theme::text_secondary(),
            )));
        }
    }

    f.render_widget(Paragraph::new(lines), area);
}
