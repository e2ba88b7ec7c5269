//! Keyboard input dispatch — global keys → help overlay → panel keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Panel};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. The help overlay consumes input first.
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')
        ) {
            app.show_help = false;
        }
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Char('1') => { app.active_panel = Panel::Overview; return; }
        KeyCode::Char('2') => { app.active_panel = Panel::Series; return; }
        KeyCode::Char('3') => { app.active_panel = Panel::Candles; return; }
        KeyCode::Char('4') => { app.active_panel = Panel::Close; return; }
        KeyCode::Char('5') => { app.active_panel = Panel::Resample; return; }
        KeyCode::Char('6') => { app.active_panel = Panel::Changes; return; }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Series => handle_series_key(app, key),
        Panel::Candles => handle_candles_key(app, key),
        Panel::Resample => handle_resample_key(app, key),
        // Display only.
        Panel::Overview | Panel::Close | Panel::Changes => {}
    }
}

fn handle_series_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('l') | KeyCode::Right => app.cycle_column(true),
        KeyCode::Char('h') | KeyCode::Left => app.cycle_column(false),
        _ => {}
    }
}

fn handle_candles_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') => app.grow_candle_window(),
        KeyCode::Char('-') => app.shrink_candle_window(),
        KeyCode::Char('0') => app.reset_candle_window(),
        _ => {}
    }
}

fn handle_resample_key(app: &mut AppState, key: KeyEvent) {
    if key.code == KeyCode::Char('p') {
        app.cycle_period();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_state;
    use btclab_core::domain::Column;
    use btclab_core::metrics::Period;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_quits() {
        let mut app = sample_state(10);
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn digits_jump_to_panels() {
        let mut app = sample_state(10);
        handle_key(&mut app, press(KeyCode::Char('5')));
        assert_eq!(app.active_panel, Panel::Resample);
        handle_key(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.active_panel, Panel::Overview);
    }

    #[test]
    fn tab_cycles_panels() {
        let mut app = sample_state(10);
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.active_panel, Panel::Series);
        handle_key(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.active_panel, Panel::Overview);
    }

    #[test]
    fn help_overlay_consumes_keys() {
        let mut app = sample_state(10);
        handle_key(&mut app, press(KeyCode::Char('?')));
        assert!(app.show_help);

        // q closes the overlay instead of quitting.
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(app.running);
    }

    #[test]
    fn series_keys_cycle_column() {
        let mut app = sample_state(10);
        app.active_panel = Panel::Series;
        assert_eq!(app.series_column, Column::Close);
        handle_key(&mut app, press(KeyCode::Char('l')));
        assert_eq!(app.series_column, Column::Volume);
        handle_key(&mut app, press(KeyCode::Char('h')));
        assert_eq!(app.series_column, Column::Close);
    }

    #[test]
    fn resample_key_cycles_period() {
        let mut app = sample_state(10);
        app.active_panel = Panel::Resample;
        handle_key(&mut app, press(KeyCode::Char('p')));
        assert_eq!(app.period, Period::Quarter);
    }

    #[test]
    fn panel_keys_ignored_on_other_panels() {
        let mut app = sample_state(10);
        app.active_panel = Panel::Overview;
        handle_key(&mut app, press(KeyCode::Char('p')));
        assert_eq!(app.period, Period::Year);
    }
}
