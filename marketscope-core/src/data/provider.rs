//! Quote provider trait and structured error types.
//!
//! The QuoteProvider trait abstracts over data sources (Yahoo Finance,
//! synthetic) so the pipeline can swap implementations and tests can script
//! responses.

use crate::domain::{Bar, FundamentalsSnapshot};
use chrono::NaiveDate;
use thiserror::Error;

/// Structured error types for data operations.
///
/// These are displayable in both CLI and TUI contexts. Any of them causes a
/// per-symbol skip; the batch never aborts on a provider error.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("provider returned HTTP {status} for {symbol}")]
    HttpStatus { status: u16, symbol: String },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("no data available for {symbol}")]
    EmptyHistory { symbol: String },

    #[error("data error: {0}")]
    Other(String),
}

/// Trait for quote providers.
///
/// `history` returns daily bars sorted ascending by date; `fundamentals`
/// returns a snapshot whose fields are `None` when the provider has no
/// value. Both calls are synchronous: the screen pipeline runs them one
/// symbol at a time in selection order.
pub trait QuoteProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily OHLCV bars for a symbol over a date range.
    fn history(&self, symbol: &str, start: NaiveDate, end: NaiveDate)
        -> Result<Vec<Bar>, DataError>;

    /// Fetch the fundamentals snapshot for a symbol.
    fn fundamentals(&self, symbol: &str) -> Result<FundamentalsSnapshot, DataError>;
}

/// Progress callback for multi-symbol screen runs.
pub trait FetchProgress: Send {
    /// Called when starting to fetch a symbol.
    fn on_start(&self, symbol: &str, index: usize, total: usize);

    /// Called when a symbol is skipped (empty history or provider error).
    fn on_skip(&self, symbol: &str, index: usize, total: usize, error: &DataError);

    /// Called when a symbol has been fetched and enriched.
    fn on_fetched(&self, symbol: &str, index: usize, total: usize);

    /// Called when the entire batch is done.
    fn on_batch_complete(&self, screened: usize, skipped: usize, total: usize);
}

/// Progress reporter that prints to stdout (CLI use).
pub struct StdoutProgress;

impl FetchProgress for StdoutProgress {
    fn on_start(&self, symbol: &str, index: usize, total: usize) {
        println!("[{}/{}] Fetching {symbol}...", index + 1, total);
    }

    fn on_skip(&self, symbol: &str, _index: usize, _total: usize, error: &DataError) {
        println!("  SKIP: {symbol}: {error}");
    }

    fn on_fetched(&self, symbol: &str, _index: usize, _total: usize) {
        println!("  OK: {symbol}");
    }

    fn on_batch_complete(&self, screened: usize, skipped: usize, total: usize) {
        println!("\nScreen complete: {screened}/{total} fetched, {skipped} skipped");
    }
}

/// Progress reporter that discards all events (tests, library callers).
pub struct SilentProgress;

impl FetchProgress for SilentProgress {
    fn on_start(&self, _symbol: &str, _index: usize, _total: usize) {}
    fn on_skip(&self, _symbol: &str, _index: usize, _total: usize, _error: &DataError) {}
    fn on_fetched(&self, _symbol: &str, _index: usize, _total: usize) {}
    fn on_batch_complete(&self, _screened: usize, _skipped: usize, _total: usize) {}
}
