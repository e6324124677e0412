//! MarketScope TUI — sector screener dashboard.
//!
//! Panels:
//! 1. Select — sector/ticker tree, pick up to 10 stocks or one sector
//! 2. Table — formatted fundamentals summary for the last run
//! 3. Charts — indicator line charts (per-symbol or comparison)
//! 4. Help — keyboard shortcuts

mod app;
mod chart_plan;
mod input;
mod theme;
mod ui;
mod worker;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use marketscope_core::data::SectorCatalog;

use crate::app::{AppState, ErrorCategory, Panel};
use crate::worker::{WorkerCommand, WorkerResponse};

fn main() -> Result<()> {
    // Restore the terminal before printing any panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let catalog = load_catalog()?;
    let offline = std::env::var("MARKETSCOPE_OFFLINE").is_ok_and(|v| v == "1");

    // Worker channels.
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let worker_handle = worker::spawn_worker(cmd_rx, resp_tx);

    let mut app = AppState::new(cmd_tx.clone(), resp_rx, catalog, offline);

    // Setup terminal.
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Shutdown worker.
    let _ = cmd_tx.send(WorkerCommand::Shutdown);
    let _ = worker_handle.join();

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Catalog from `MARKETSCOPE_CATALOG` (TOML), else the built-in NSE lists.
fn load_catalog() -> Result<SectorCatalog> {
    match std::env::var_os("MARKETSCOPE_CATALOG") {
        Some(path) => {
            let path = PathBuf::from(path);
            SectorCatalog::from_file(&path).map_err(|e| anyhow::anyhow!(e))
        }
        None => Ok(SectorCatalog::default_nse()),
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Drain worker responses (non-blocking).
        while let Ok(resp) = app.worker_rx.try_recv() {
            handle_worker_response(app, resp);
        }

        // Poll for input so worker responses keep flowing while idle.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        if !app.running {
            return Ok(());
        }
    }
}

fn handle_worker_response(app: &mut AppState, resp: WorkerResponse) {
    match resp {
        WorkerResponse::FetchProgress {
            symbol,
            index,
            total,
        } => {
            app.fetch_current = Some(symbol.clone());
            app.fetch_done = index;
            app.fetch_total = total;
            app.set_status(format!("Fetching {symbol} [{}/{total}]", index + 1));
        }
        WorkerResponse::SymbolSkipped { symbol, reason } => {
            app.record_error(ErrorCategory::Data, reason.clone(), symbol.clone());
            app.set_warning(format!("skipped {symbol}: {reason}"));
        }
        WorkerResponse::ScreenComplete { report } => {
            app.fetch_in_progress = false;
            app.fetch_current = None;
            app.rows = report.rows();
            app.skipped = report.skipped.clone();
            app.charts = chart_plan::build_plans(&report.results);
            app.active_chart = 0;

            if report.is_empty() {
                app.set_error("no data for any selected symbol");
            } else {
                app.set_status(format!(
                    "screened {} symbols ({} skipped)",
                    report.results.len(),
                    report.skipped.len()
                ));
                app.active_panel = Panel::Table;
            }
        }
        WorkerResponse::WorkerError { message } => {
            app.fetch_in_progress = false;
            app.fetch_current = None;
            app.record_error(ErrorCategory::Other, message.clone(), "worker");
            app.set_error(message);
        }
    }
}
