//! Panel 4 — Close: closing price, linear scale next to log1p scale.
//!
//! The log side compresses the 2017 run-up so the 2013-2015 structure
//! stays visible in the same frame.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType};
use ratatui::Frame;

use btclab_core::metrics::log1p_series;

use crate::app::AppState;
use crate::theme;

use super::{date_labels, padded_bounds, value_labels};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if app.records.is_empty() {
        return;
    }

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let closes: Vec<f64> = app.records.iter().map(|r| r.close).collect();
    let log_closes = log1p_series(&closes);

    render_chart(f, halves[0], app, &closes, " Close (linear) ", "USD");
    render_chart(f, halves[1], app, &log_closes, " Close (log1p) ", "ln(1+x)");
}

fn render_chart(
    f: &mut Frame,
    area: Rect,
    app: &AppState,
    values: &[f64],
    title: &str,
    y_title: &str,
) {
    let data: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect();
    let (y_lower, y_upper) = padded_bounds(values);

    let datasets = vec![Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(theme::accent())
        .data(&data)];

    let chart = Chart::new(datasets)
        .block(Block::default().title(Span::styled(title.to_string(), theme::accent_bold())))
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, data.len() as f64])
                .labels(date_labels(&app.records)),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(y_title.to_string(), theme::text_secondary()))
                .style(theme::muted())
                .bounds([y_lower, y_upper])
                .labels(value_labels(y_lower, y_upper)),
        );

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_state;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn renders_both_scales() {
        let app = sample_state(30);
        let backend = TestBackend::new(120, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, f.area(), &app)).unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("Close (linear)"));
        assert!(content.contains("Close (log1p)"));
    }

    #[test]
    fn empty_dataset_renders_nothing() {
        let mut app = sample_state(1);
        app.records.clear();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, f.area(), &app)).unwrap();
    }
}
