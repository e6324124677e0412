//! Enrichment — bars plus the screener's derived columns.

use super::{Indicator, Macd, Rsi, Sma};
use crate::domain::{Bar, Symbol};
use chrono::NaiveDate;

/// Moving-average window for the price overlay.
pub const MA_PERIOD: usize = 50;

/// RSI window.
pub const RSI_PERIOD: usize = 14;

/// One symbol's bar history with aligned derived columns.
///
/// All four columns have the same length as `bars`; NaN marks samples
/// where the indicator is undefined.
#[derive(Debug, Clone)]
pub struct EnrichedSeries {
    pub symbol: Symbol,
    pub bars: Vec<Bar>,
    pub ma50: Vec<f64>,
    pub rsi14: Vec<f64>,
    pub macd: Vec<f64>,
    pub macd_signal: Vec<f64>,
}

impl EnrichedSeries {
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Most recent non-NaN close, if any.
    pub fn latest_close(&self) -> Option<f64> {
        self.bars
            .iter()
            .rev()
            .map(|b| b.close)
            .find(|c| !c.is_nan())
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.bars.iter().map(|b| b.date)
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }
}

/// Append the screener's derived columns to a bar history.
pub fn enrich(symbol: Symbol, bars: Vec<Bar>) -> EnrichedSeries {
    let ma50 = Sma::new(MA_PERIOD).compute(&bars);
    let rsi14 = Rsi::new(RSI_PERIOD).compute(&bars);
    let macd_out = Macd::standard().compute(&bars);

    EnrichedSeries {
        symbol,
        bars,
        ma50,
        rsi14,
        macd: macd_out.macd,
        macd_signal: macd_out.signal,
    }
}
