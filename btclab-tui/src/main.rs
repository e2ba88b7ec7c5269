//! btclab TUI — six-panel terminal explorer for a daily BTC OHLC dataset.
//!
//! Panels:
//! 1. Overview — dataset facts and per-column summary statistics
//! 2. Series — line chart of one value column
//! 3. Candles — candlestick chart over the first N days
//! 4. Close — closing price, linear next to log1p
//! 5. Resample — mean close per year / quarter / month
//! 6. Changes — day-over-day close pct-change

use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use btclab_core::config::ReportConfig;
use btclab_core::pipeline::load_dataset;

use btclab_tui::{input, persistence, ui, AppState};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = config_from_args()?;

    // Load and validate before touching the terminal so failures print
    // to a normal stderr.
    let records = load_dataset(&config.csv_path)
        .with_context(|| format!("loading {}", config.csv_path.display()))?;
    let source_label = config
        .csv_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.csv_path.display().to_string());

    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("btclab")
        .join("state.json");

    let mut app = AppState::new(records, &config, source_label);
    persistence::apply(&mut app, persistence::load(&state_path));

    // Restore the terminal before printing any panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    let _ = persistence::save(&state_path, &persistence::extract(&app));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn config_from_args() -> Result<ReportConfig> {
    config_from_arg(std::env::args().nth(1).as_deref())
}

/// One optional argument: a CSV path, or a `.toml` report config.
/// Without one, the dataset's conventional file name in the working dir.
fn config_from_arg(arg: Option<&str>) -> Result<ReportConfig> {
    match arg {
        Some(path) => {
            let path = Path::new(path);
            if path.extension().is_some_and(|ext| ext == "toml") {
                Ok(ReportConfig::from_file(path)?)
            } else {
                Ok(ReportConfig::for_csv(path))
            }
        }
        None => Ok(ReportConfig::for_csv(Path::new("bitcoin_price.csv"))),
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // 50ms poll for a ~20 FPS tick.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}
