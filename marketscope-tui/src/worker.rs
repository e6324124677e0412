//! Background worker thread — network fetching runs here.
//!
//! The main thread owns all UI state; the worker communicates via `mpsc`
//! channels. Within one screen run the symbols are fetched strictly
//! sequentially in selection order.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use chrono::NaiveDate;

use marketscope_core::data::provider::{DataError, FetchProgress};
use marketscope_core::data::{QuoteProvider, SyntheticProvider, YahooProvider};
use marketscope_core::domain::Symbol;
use marketscope_core::screen::{run_screen, ScreenReport};

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    RunScreen {
        symbols: Vec<Symbol>,
        start: NaiveDate,
        end: NaiveDate,
        offline: bool,
    },
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug, Clone)]
pub enum WorkerResponse {
    FetchProgress {
        symbol: String,
        index: usize,
        total: usize,
    },
    SymbolSkipped {
        symbol: String,
        reason: String,
    },
    ScreenComplete {
        report: Box<ScreenReport>,
    },
    WorkerError {
        message: String,
    },
}

/// Forwards pipeline progress into the response channel.
struct ChannelProgress {
    tx: Sender<WorkerResponse>,
}

impl FetchProgress for ChannelProgress {
    fn on_start(&self, symbol: &str, index: usize, total: usize) {
        let _ = self.tx.send(WorkerResponse::FetchProgress {
            symbol: symbol.to_string(),
            index,
            total,
        });
    }

    fn on_skip(&self, symbol: &str, _index: usize, _total: usize, error: &DataError) {
        let _ = self.tx.send(WorkerResponse::SymbolSkipped {
            symbol: symbol.to_string(),
            reason: error.to_string(),
        });
    }

    fn on_fetched(&self, _symbol: &str, _index: usize, _total: usize) {}

    fn on_batch_complete(&self, _screened: usize, _skipped: usize, _total: usize) {}
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name("marketscope-worker".into())
        .spawn(move || worker_loop(rx, tx))
        .expect("failed to spawn worker thread")
}

fn worker_loop(rx: Receiver<WorkerCommand>, tx: Sender<WorkerResponse>) {
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::RunScreen {
                symbols,
                start,
                end,
                offline,
            }) => {
                run_one_screen(&symbols, start, end, offline, &tx);
            }
        }
    }
}

fn run_one_screen(
    symbols: &[Symbol],
    start: NaiveDate,
    end: NaiveDate,
    offline: bool,
    tx: &Sender<WorkerResponse>,
) {
    let provider: Box<dyn QuoteProvider> = if offline {
        Box::new(SyntheticProvider::new())
    } else {
        match YahooProvider::new() {
            Ok(p) => Box::new(p),
            Err(e) => {
                let _ = tx.send(WorkerResponse::WorkerError {
                    message: e.to_string(),
                });
                return;
            }
        }
    };

    let progress = ChannelProgress { tx: tx.clone() };
    let report = run_screen(provider.as_ref(), symbols, start, end, &progress);
    let _ = tx.send(WorkerResponse::ScreenComplete {
        report: Box::new(report),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn offline_run_completes_and_shuts_down() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let handle = spawn_worker(cmd_rx, resp_tx);

        let end = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();
        let start = end - chrono::Duration::days(365);
        cmd_tx
            .send(WorkerCommand::RunScreen {
                symbols: vec![Symbol::new("TCS.NS"), Symbol::new("INFY.NS")],
                start,
                end,
                offline: true,
            })
            .unwrap();

        let mut report = None;
        while let Ok(resp) = resp_rx.recv() {
            if let WorkerResponse::ScreenComplete { report: r } = resp {
                report = Some(r);
                break;
            }
        }
        let report = report.expect("worker never completed");
        assert_eq!(report.results.len(), 2);

        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }
}
