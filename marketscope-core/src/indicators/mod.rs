//! Technical indicators — pure functions over a bar series.
//!
//! Each indicator maps a bar series to a numeric series of the same length.
//! Warmup samples, where the value is undefined for insufficient history,
//! are `f64::NAN`; a NaN input taints dependent outputs rather than being
//! silently patched.

pub mod ema;
pub mod enrich;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use ema::{ema_of_series, Ema};
pub use enrich::{enrich, EnrichedSeries, MA_PERIOD, RSI_PERIOD};
pub use macd::{Macd, MacdSeries};
pub use rsi::Rsi;
pub use sma::Sma;

use crate::domain::Bar;

/// Trait for single-series indicators over close prices.
///
/// The output has the same length as the input; the first `lookback()`
/// values are NaN. No value at index t may depend on bars after t.
pub trait Indicator: Send + Sync {
    /// Human-readable name (e.g., "sma_50", "rsi_14").
    fn name(&self) -> &str;

    /// Number of leading samples with no defined value.
    fn lookback(&self) -> usize;

    /// Compute the output series for the full bar history.
    fn compute(&self, bars: &[Bar]) -> Vec<f64>;
}

/// Create synthetic bars from close prices for testing.
#[cfg(test)]
pub fn make_bars(closes: &[f64]) -> Vec<Bar> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Bar {
                symbol: "TEST.NS".to_string(),
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: 1000,
                adj_close: close,
            }
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, epsilon={epsilon}"
    );
}

#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
