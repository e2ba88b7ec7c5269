//! Panel 2 — Series: line chart of one value column over time.

use ratatui::layout::Rect;
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

use super::{date_labels, padded_bounds, value_labels};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let values = app.series_column.series(&app.records);
    if values.is_empty() {
        return;
    }

    let data: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect();

    let (y_lower, y_upper) = padded_bounds(&values);
    let x_max = data.len() as f64;

    let datasets = vec![Dataset::default()
        .name(app.series_column.label())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(theme::accent())
        .data(&data)];

    let title = format!(
        " {} | {} days | h/l: column ",
        app.series_column.label(),
        data.len()
    );

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
                .title(Span::styled("USD", theme::text_secondary()))
                .style(theme::muted())
                .bounds([y_lower, y_upper])
                .labels(value_labels(y_lower, y_upper)),
        );

    f.render_widget(chart, area);
}
