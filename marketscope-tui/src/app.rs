//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. The worker thread communicates via channels.

use std::collections::{HashSet, VecDeque};
use std::sync::mpsc::{Receiver, Sender};

use chrono::{Local, NaiveDateTime};

use marketscope_core::data::SectorCatalog;
use marketscope_core::report::DisplayRow;
use marketscope_core::screen::{trailing_year, SkippedSymbol};
use marketscope_core::select::{self, Selection, MAX_PICKS};

use crate::chart_plan::ChartPlan;
use crate::worker::{WorkerCommand, WorkerResponse};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Select,
    Table,
    Charts,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Select => 0,
            Panel::Table => 1,
            Panel::Charts => 2,
            Panel::Help => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Select),
            1 => Some(Panel::Table),
            2 => Some(Panel::Charts),
            3 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Select => "Select",
            Panel::Table => "Table",
            Panel::Charts => "Charts",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 4).unwrap_or(Panel::Select)
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 3) % 4).unwrap_or(Panel::Select)
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Overlays drawn on top of the active panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Welcome,
    ErrorHistory,
    None,
}

/// Error category for the history overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Other,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Network => "NET",
            ErrorCategory::Data => "DATA",
            ErrorCategory::Other => "ERR",
        }
    }
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
    pub context: String,
}

/// An item in the sector/ticker tree.
#[derive(Debug, Clone)]
pub enum TreeItem {
    Sector(String),
    Ticker(String, String), // (sector_name, ticker)
}

/// Select panel state — the sector tree plus the current selection.
///
/// Sector mode and individual picks are mutually exclusive: choosing a
/// sector locks the checkboxes until it is cleared.
#[derive(Debug)]
pub struct SelectState {
    pub catalog: SectorCatalog,
    pub picks: Vec<String>,
    pub sector_mode: Option<String>,
    pub expanded: HashSet<String>,
    pub cursor: usize,
    pub offline: bool,
}

impl SelectState {
    pub fn new(catalog: SectorCatalog, offline: bool) -> Self {
        let expanded = catalog.sector_names().into_iter().map(String::from).collect();
        Self {
            catalog,
            picks: Vec::new(),
            sector_mode: None,
            expanded,
            cursor: 0,
            offline,
        }
    }

    /// Count visible tree rows (sectors plus tickers of expanded sectors).
    pub fn visible_row_count(&self) -> usize {
        let mut count = 0;
        for sector in self.catalog.sector_names() {
            count += 1;
            if self.expanded.contains(sector) {
                count += self.catalog.sector_tickers(sector).map_or(0, <[String]>::len);
            }
        }
        count
    }

    /// Resolve the cursor row to a sector or a (sector, ticker) pair.
    pub fn cursor_item(&self) -> Option<TreeItem> {
        let mut row = 0;
        for sector in self.catalog.sector_names() {
            if row == self.cursor {
                return Some(TreeItem::Sector(sector.to_string()));
            }
            row += 1;
            if self.expanded.contains(sector) {
                if let Some(tickers) = self.catalog.sector_tickers(sector) {
                    for ticker in tickers {
                        if row == self.cursor {
                            return Some(TreeItem::Ticker(sector.to_string(), ticker.clone()));
                        }
                        row += 1;
                    }
                }
            }
        }
        None
    }

    /// Toggle an individual pick. Returns an error message when the
    /// selection is locked by sector mode or the pick cap is hit.
    pub fn toggle_pick(&mut self, ticker: &str) -> Result<(), String> {
        if let Some(sector) = &self.sector_mode {
            return Err(format!("individual picks are locked while sector '{sector}' is selected"));
        }
        if let Some(pos) = self.picks.iter().position(|t| t == ticker) {
            self.picks.remove(pos);
            return Ok(());
        }
        if self.picks.len() >= MAX_PICKS {
            return Err(format!("at most {MAX_PICKS} stocks can be selected at once"));
        }
        self.picks.push(ticker.to_string());
        Ok(())
    }

    /// Enter or leave sector mode for the given sector.
    pub fn toggle_sector(&mut self, sector: &str) {
        if self.sector_mode.as_deref() == Some(sector) {
            self.sector_mode = None;
        } else {
            self.sector_mode = Some(sector.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.picks.clear();
        self.sector_mode = None;
    }

    /// The current selection as the pipeline sees it.
    pub fn selection(&self) -> Selection {
        match &self.sector_mode {
            Some(sector) => Selection::Sector(sector.clone()),
            None => Selection::Symbols(self.picks.clone()),
        }
    }
}

const ERROR_HISTORY_CAP: usize = 100;

/// Top-level application state.
pub struct AppState {
    pub running: bool,
    pub active_panel: Panel,
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,

    pub select: SelectState,

    // Last completed screen run.
    pub rows: Vec<DisplayRow>,
    pub skipped: Vec<SkippedSymbol>,
    pub charts: Vec<ChartPlan>,
    pub active_chart: usize,

    // Fetch progress.
    pub fetch_in_progress: bool,
    pub fetch_current: Option<String>,
    pub fetch_done: usize,
    pub fetch_total: usize,

    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,
}

impl AppState {
    pub fn new(
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
        catalog: SectorCatalog,
        offline: bool,
    ) -> Self {
        Self {
            running: true,
            active_panel: Panel::Select,
            overlay: Overlay::Welcome,
            status_message: None,
            error_history: VecDeque::new(),
            error_scroll: 0,
            select: SelectState::new(catalog, offline),
            rows: Vec::new(),
            skipped: Vec::new(),
            charts: Vec::new(),
            active_chart: 0,
            fetch_in_progress: false,
            fetch_current: None,
            fetch_done: 0,
            fetch_total: 0,
            worker_tx,
            worker_rx,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), StatusLevel::Error));
    }

    pub fn record_error(
        &mut self,
        category: ErrorCategory,
        message: impl Into<String>,
        context: impl Into<String>,
    ) {
        self.error_history.push_front(ErrorRecord {
            timestamp: Local::now().naive_local(),
            category,
            message: message.into(),
            context: context.into(),
        });
        self.error_history.truncate(ERROR_HISTORY_CAP);
    }

    /// Validate the current selection and hand it to the worker.
    ///
    /// Resolution happens here, on the main thread, so an empty or
    /// oversized selection warns immediately without any fetch.
    pub fn start_screen(&mut self) {
        if self.fetch_in_progress {
            self.set_warning("a screen run is already in progress");
            return;
        }

        let symbols = match select::resolve(&self.select.selection(), &self.select.catalog) {
            Ok(symbols) => symbols,
            Err(e) => {
                self.set_warning(e.to_string());
                return;
            }
        };

        let (start, end) = trailing_year(Local::now().date_naive());
        self.fetch_in_progress = true;
        self.fetch_current = None;
        self.fetch_done = 0;
        self.fetch_total = symbols.len();

        let cmd = WorkerCommand::RunScreen {
            symbols,
            start,
            end,
            offline: self.select.offline,
        };
        if self.worker_tx.send(cmd).is_err() {
            self.fetch_in_progress = false;
            self.set_error("worker thread is gone; restart the app");
        }
    }
}

#[cfg(test)]
pub fn make_test_app() -> AppState {
    let (tx, _keep_rx) = std::sync::mpsc::channel();
    let (_keep_tx, rx) = std::sync::mpsc::channel::<WorkerResponse>();
    // Leak the counterpart ends so sends in tests do not error out.
    std::mem::forget(_keep_rx);
    std::mem::forget(_keep_tx);
    AppState::new(tx, rx, SectorCatalog::default_nse(), true)
}
