//! Screen pipeline — fetch, enrich, and format a selection in one pass.
//!
//! One call per user action: symbols are fetched sequentially in selection
//! order, each failure skips only that symbol, and the returned report is
//! complete and self-contained. No state survives between runs.

use crate::data::provider::{DataError, FetchProgress, QuoteProvider};
use crate::domain::{FundamentalsSnapshot, Symbol};
use crate::indicators::{enrich, EnrichedSeries};
use crate::report::DisplayRow;
use chrono::{Duration, NaiveDate};

/// Trailing history window requested per symbol.
pub const HISTORY_DAYS: i64 = 365;

/// The one-year window ending at `end`.
pub fn trailing_year(end: NaiveDate) -> (NaiveDate, NaiveDate) {
    (end - Duration::days(HISTORY_DAYS), end)
}

/// One surviving symbol: enriched history plus its fundamentals snapshot.
#[derive(Debug, Clone)]
pub struct SymbolResult {
    pub series: EnrichedSeries,
    pub fundamentals: FundamentalsSnapshot,
}

/// A symbol dropped from the run, with the reason shown to the user.
#[derive(Debug, Clone)]
pub struct SkippedSymbol {
    pub symbol: Symbol,
    pub reason: String,
}

/// Everything one screen run produced.
#[derive(Debug, Clone)]
pub struct ScreenReport {
    pub results: Vec<SymbolResult>,
    pub skipped: Vec<SkippedSymbol>,
}

impl ScreenReport {
    /// Formatted table rows, numbered from 1 in selection order over the
    /// surviving symbols.
    pub fn rows(&self) -> Vec<DisplayRow> {
        self.results
            .iter()
            .enumerate()
            .map(|(i, r)| {
                DisplayRow::build(
                    i + 1,
                    &r.series.symbol.label,
                    r.series.latest_close(),
                    &r.fundamentals,
                )
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Run the pipeline for an already-resolved symbol list.
///
/// History failures (including an empty series) skip the symbol; a
/// fundamentals failure degrades to an all-unavailable snapshot so the row
/// still renders with markers. The batch itself never aborts.
pub fn run_screen(
    provider: &dyn QuoteProvider,
    symbols: &[Symbol],
    start: NaiveDate,
    end: NaiveDate,
    progress: &dyn FetchProgress,
) -> ScreenReport {
    let total = symbols.len();
    let mut results = Vec::new();
    let mut skipped = Vec::new();

    for (i, symbol) in symbols.iter().enumerate() {
        progress.on_start(&symbol.ticker, i, total);

        let bars = match provider.history(&symbol.ticker, start, end) {
            Ok(bars) if bars.is_empty() => Err(DataError::EmptyHistory {
                symbol: symbol.ticker.clone(),
            }),
            other => other,
        };

        match bars {
            Ok(bars) => {
                let fundamentals = provider
                    .fundamentals(&symbol.ticker)
                    .unwrap_or_else(|_| FundamentalsSnapshot::unavailable());
                let series = enrich(symbol.clone(), bars);
                results.push(SymbolResult {
                    series,
                    fundamentals,
                });
                progress.on_fetched(&symbol.ticker, i, total);
            }
            Err(e) => {
                progress.on_skip(&symbol.ticker, i, total, &e);
                skipped.push(SkippedSymbol {
                    symbol: symbol.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    progress.on_batch_complete(results.len(), skipped.len(), total);

    ScreenReport { results, skipped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_year_spans_365_days() {
        let end = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();
        let (start, e) = trailing_year(end);
        assert_eq!(e, end);
        assert_eq!((e - start).num_days(), 365);
    }
}
