//! Neon-on-dark theme tokens for the chart panels.
//!
//! One palette struct plus free style helpers for the places that only
//! need a `Style`. Direction-colored values (daily changes, candle bodies)
//! go through `change_color`.

use ratatui::style::{Color, Modifier, Style};

/// Color palette for all panels.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Deep charcoal background.
    pub background: Color,
    /// Electric cyan (focus, chart lines).
    pub accent: Color,
    /// Neon green (up days, gains).
    pub positive: Color,
    /// Hot pink (down days, losses).
    pub negative: Color,
    /// Neon orange (warnings, anomalies).
    pub warning: Color,
    /// Cool purple (secondary series).
    pub neutral: Color,
    /// Steel blue (axes, disabled, hints).
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

pub const THEME: Theme = Theme {
    background: Color::Rgb(18, 18, 20),
    accent: Color::Rgb(0, 255, 255),
    positive: Color::Rgb(0, 255, 128),
    negative: Color::Rgb(255, 20, 147),
    warning: Color::Rgb(255, 140, 0),
    neutral: Color::Rgb(147, 112, 219),
    muted: Color::Rgb(100, 149, 237),
    text_primary: Color::White,
    text_secondary: Color::Rgb(170, 170, 170),
};

impl Theme {
    /// Color for a signed daily change: up is green, down is pink.
    pub fn change_color(&self, value: f64) -> Color {
        if value >= 0.0 {
            self.positive
        } else {
            self.negative
        }
    }

    /// Color for an anomaly count: zero is calm, anything else warns.
    pub fn anomaly_color(&self, count: usize) -> Color {
        if count == 0 {
            self.muted
        } else {
            self.warning
        }
    }
}

pub fn accent() -> Style {
    Style::default().fg(THEME.accent)
}

pub fn accent_bold() -> Style {
    Style::default().fg(THEME.accent).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.warning)
}

pub fn negative() -> Style {
    Style::default().fg(THEME.negative)
}

pub fn neutral() -> Style {
    Style::default().fg(THEME.neutral)
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

pub fn text_secondary() -> Style {
    Style::default().fg(THEME.text_secondary)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}
