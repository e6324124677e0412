//! Synthetic quote provider — deterministic offline data.
//!
//! Generates a seeded geometric random walk per symbol so demo runs and
//! tests produce stable output without network access. The same symbol and
//! date range always yield the same series.

use super::provider::{DataError, QuoteProvider};
use crate::domain::{Bar, FundamentalsSnapshot};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct SyntheticProvider;

impl SyntheticProvider {
    pub fn new() -> Self {
        Self
    }

    fn seed_for(symbol: &str) -> u64 {
        // FNV-1a over the ticker, so each symbol gets its own walk.
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for b in symbol.bytes() {
            hash ^= u64::from(b);
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }
        hash
    }
}

impl Default for SyntheticProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteProvider for SyntheticProvider {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Bar>, DataError> {
        if end < start {
            return Err(DataError::Other(format!(
                "invalid range: {start} after {end}"
            )));
        }

        let mut rng = StdRng::seed_from_u64(Self::seed_for(symbol));
        let mut price = 100.0 + rng.gen_range(0.0..2400.0);
        let drift = rng.gen_range(-0.0004..0.0008);

        let mut bars = Vec::new();
        let mut date = start;
        while date <= end {
            if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                let open = price;
                let step: f64 = rng.gen_range(-0.02..0.02) + drift;
                let close = (open * (1.0 + step)).max(1.0);
                let high = open.max(close) * (1.0 + rng.gen_range(0.0..0.01));
                let low = open.min(close) * (1.0 - rng.gen_range(0.0..0.01));
                let volume = rng.gen_range(100_000..5_000_000);

                bars.push(Bar {
                    symbol: symbol.to_string(),
                    date,
                    open,
                    high,
                    low,
                    close,
                    volume,
                    adj_close: close,
                });
                price = close;
            }
            date += Duration::days(1);
        }

        if bars.is_empty() {
            return Err(DataError::EmptyHistory {
                symbol: symbol.to_string(),
            });
        }
        Ok(bars)
    }

    fn fundamentals(&self, symbol: &str) -> Result<FundamentalsSnapshot, DataError> {
        let mut rng = StdRng::seed_from_u64(Self::seed_for(symbol) ^ 0xf0da);
        let price = 100.0 + rng.gen_range(0.0..2400.0);
        let eps = price / rng.gen_range(12.0..40.0);

        // Leave some fields unavailable so N/A handling stays visible offline.
        let pays_dividend = rng.gen_bool(0.7);
        Ok(FundamentalsSnapshot {
            market_cap: Some(price * rng.gen_range(1e8..2e9)),
            trailing_pe: Some(price / eps),
            dividend_yield: pays_dividend.then(|| rng.gen_range(0.001..0.04)),
            fifty_two_week_high: Some(price * rng.gen_range(1.05..1.4)),
            fifty_two_week_low: Some(price * rng.gen_range(0.6..0.95)),
            trailing_eps: Some(eps),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> (NaiveDate, NaiveDate) {
        (
            NaiveDate::from_ymd_opt(2024, 8, 7).unwrap(),
            NaiveDate::from_ymd_opt(2025, 8, 7).unwrap(),
        )
    }

    #[test]
    fn one_year_yields_about_261_weekdays() {
        let (start, end) = range();
        let bars = SyntheticProvider::new()
            .history("TCS.NS", start, end)
            .unwrap();
        assert!(bars.len() >= 255 && bars.len() <= 265, "got {}", bars.len());
        assert!(bars.windows(2).all(|w| w[0].date < w[1].date));
        assert!(bars.iter().all(Bar::is_sane));
    }

    #[test]
    fn same_symbol_is_deterministic() {
        let (start, end) = range();
        let p = SyntheticProvider::new();
        let a = p.history("INFY.NS", start, end).unwrap();
        let b = p.history("INFY.NS", start, end).unwrap();
        assert_eq!(a.len(), b.len());
        assert_eq!(a[10].close, b[10].close);
    }

    #[test]
    fn different_symbols_diverge() {
        let (start, end) = range();
        let p = SyntheticProvider::new();
        let a = p.history("INFY.NS", start, end).unwrap();
        let b = p.history("WIPRO.NS", start, end).unwrap();
        assert_ne!(a[10].close, b[10].close);
    }

    #[test]
    fn fundamentals_are_deterministic() {
        let p = SyntheticProvider::new();
        let a = p.fundamentals("SBIN.NS").unwrap();
        let b = p.fundamentals("SBIN.NS").unwrap();
        assert_eq!(a, b);
        assert!(a.market_cap.is_some());
    }
}
