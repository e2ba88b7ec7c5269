//! Panel 6 — Changes: day-over-day close pct-change with a zero baseline.

use ratatui::layout::Rect;
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

use super::date_labels;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    // First record has no prior close, so the series starts at index 1.
    let data: Vec<(f64, f64)> = app
        .records
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.close_pct_change.map(|pct| (i as f64, pct)))
        .collect();
    if data.is_empty() {
        return;
    }

    let min = data.iter().map(|&(_, v)| v).fold(f64::INFINITY, f64::min);
    let max = data
        .iter()
        .map(|&(_, v)| v)
        .fold(f64::NEG_INFINITY, f64::max);
    // Keep zero inside the frame so the baseline always shows.
    let y_lower = min.min(0.0) * 1.05 - 1.0;
    let y_upper = max.max(0.0) * 1.05 + 1.0;
    let x_max = app.records.len() as f64;

    let baseline: Vec<(f64, f64)> = vec![(0.0, 0.0), (x_max, 0.0)];

    let best = data.iter().cloned().fold(
        (0.0, f64::NEG_INFINITY),
        |acc, p| if p.1 > acc.1 { p } else { acc },
    );
    let worst = data
        .iter()
        .cloned()
        .fold((0.0, f64::INFINITY), |acc, p| if p.1 < acc.1 { p } else { acc });
    let title = format!(
        " daily close change % | best {:+.2}% worst {:+.2}% ",
        best.1, worst.1
    );

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme::muted())
            .data(&baseline),
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme::neutral())
            .data(&data),
    ];

    let chart = Chart::new(datasets)
        .block(Block::default().title(Span::styled(title, theme::accent_bold())))
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, x_max])
                .labels(date_labels(&app.records)),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("%", theme::text_secondary()))
                .style(theme::muted())
                .bounds([y_lower, y_upper])
                .labels(vec![
                    Span::raw(format!("{y_lower:.1}")),
                    Span::raw("0.0".to_string()),
                    Span::raw(format!("{y_upper:.1}")),
                ]),
        );

    f.render_widget(chart, area);
}
