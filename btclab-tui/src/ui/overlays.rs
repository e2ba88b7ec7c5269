//! Help overlay — keyboard shortcuts per panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Help [Esc/q/? to close] ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global");
    key(&mut lines, "1-6", "Switch to panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "?", "Toggle this help");
    key(&mut lines, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 2 — Series");
    key(&mut lines, "h / l", "Previous / next column");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 3 — Candles");
    key(&mut lines, "+ / -", "Grow / shrink window by 10 days");
    key(&mut lines, "0", "Reset window to configured size");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 5 — Resample");
    key(&mut lines, "p", "Cycle period: year → quarter → month");

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(para, popup);
}

fn section(lines: &mut Vec<Line>, title: &str) {
    lines.push(Line::from(Span::styled(
        title.to_string(),
        theme::accent_bold(),
    )));
}

fn key(lines: &mut Vec<Line>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:<18}"), theme::text()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
