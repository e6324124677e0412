//! Bar — one day of market data for one symbol.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily OHLCV bar.
///
/// Price fields use `f64::NAN` when the provider reported no value for that
/// session; downstream indicator code treats NaN as "undefined" and
/// propagates it rather than guessing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    pub symbol: String,
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub adj_close: f64,
}

impl Bar {
    /// Returns true if any price field is NaN.
    pub fn is_void(&self) -> bool {
        self.open.is_nan() || self.high.is_nan() || self.low.is_nan() || self.close.is_nan()
    }

    /// OHLC consistency check: high is the ceiling, low is the floor,
    /// prices are positive.
    pub fn is_sane(&self) -> bool {
        if self.is_void() {
            return false;
        }
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
            && self.open > 0.0
            && self.close > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bar() -> Bar {
        Bar {
            symbol: "RELIANCE.NS".into(),
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            open: 2900.0,
            high: 2955.0,
            low: 2888.0,
            close: 2945.0,
            volume: 4_200_000,
            adj_close: 2945.0,
        }
    }

    #[test]
    fn sane_bar_passes() {
        assert!(sample_bar().is_sane());
    }

    #[test]
    fn nan_close_is_void() {
        let mut bar = sample_bar();
        bar.close = f64::NAN;
        assert!(bar.is_void());
        assert!(!bar.is_sane());
    }

    #[test]
    fn high_below_low_is_insane() {
        let mut bar = sample_bar();
        bar.high = 2800.0;
        assert!(!bar.is_sane());
    }

    #[test]
    fn serializes_roundtrip() {
        let bar = sample_bar();
        let json = serde_json::to_string(&bar).unwrap();
        let back: Bar = serde_json::from_str(&json).unwrap();
        assert_eq!(bar.symbol, back.symbol);
        assert_eq!(bar.date, back.date);
        assert_eq!(bar.close, back.close);
    }
}
