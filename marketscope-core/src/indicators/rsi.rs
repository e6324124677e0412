//! Relative Strength Index, Wilder smoothing.
//!
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss), with the gain/loss
//! averages seeded over the first `period` price changes and then smoothed
//! with alpha = 1/period. Lookback is `period` (one extra sample for the
//! first change). A flat seed window (no gains, no losses) reads 50.

use super::Indicator;
use crate::domain::Bar;

#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    name: String,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "RSI period must be >= 1");
        Self {
            period,
            name: format!("rsi_{period}"),
        }
    }
}

impl Indicator for Rsi {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let n = bars.len();
        let mut out = vec![f64::NAN; n];
        if n < self.period + 1 {
            return out;
        }

        let change = |i: usize| -> f64 { bars[i].close - bars[i - 1].close };

        // Seed the averages over the first `period` changes.
        let mut avg_gain = 0.0;
        let mut avg_loss = 0.0;
        for i in 1..=self.period {
            let ch = change(i);
            if ch.is_nan() {
                return out;
            }
            if ch > 0.0 {
                avg_gain += ch;
            } else {
                avg_loss -= ch;
            }
        }
        avg_gain /= self.period as f64;
        avg_loss /= self.period as f64;
        out[self.period] = rsi_value(avg_gain, avg_loss);

        let alpha = 1.0 / self.period as f64;
        for i in (self.period + 1)..n {
            let ch = change(i);
            if ch.is_nan() {
                // Smoothing state is lost; everything from here stays NaN.
                return out;
            }
            let gain = ch.max(0.0);
            let loss = (-ch).max(0.0);
            avg_gain = alpha * gain + (1.0 - alpha) * avg_gain;
            avg_loss = alpha * loss + (1.0 - alpha) * avg_loss;
            out[i] = rsi_value(avg_gain, avg_loss);
        }
        out
    }
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_gain == 0.0 && avg_loss == 0.0 {
        50.0
    } else if avg_loss == 0.0 {
        100.0
    } else if avg_gain == 0.0 {
        0.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_bars};

    #[test]
    fn monotonic_rise_pins_at_100() {
        let bars = make_bars(&[100.0, 101.0, 102.0, 103.0, 104.0]);
        let out = Rsi::new(3).compute(&bars);
        assert!(out[2].is_nan());
        assert_approx(out[3], 100.0, 1e-9);
    }

    #[test]
    fn monotonic_fall_pins_at_0() {
        let bars = make_bars(&[104.0, 103.0, 102.0, 101.0, 100.0]);
        let out = Rsi::new(3).compute(&bars);
        assert_approx(out[3], 0.0, 1e-9);
    }

    #[test]
    fn flat_series_reads_50() {
        let bars = make_bars(&[100.0; 6]);
        let out = Rsi::new(3).compute(&bars);
        assert_approx(out[3], 50.0, 1e-9);
    }

    #[test]
    fn known_seed_value() {
        // Changes over period 3: +0.34, -0.25, -0.48
        // avg_gain = 0.34/3, avg_loss = 0.73/3
        // RSI = 100 - 100 / (1 + 0.34/0.73) = 31.7757...
        let bars = make_bars(&[44.0, 44.34, 44.09, 43.61]);
        let out = Rsi::new(3).compute(&bars);
        assert_approx(out[3], 100.0 - 100.0 / (1.0 + 0.34 / 0.73), 1e-9);
    }

    #[test]
    fn stays_within_bounds() {
        let bars = make_bars(&[100.0, 105.0, 98.0, 110.0, 95.0, 115.0, 90.0, 120.0]);
        let out = Rsi::new(3).compute(&bars);
        for v in out.into_iter().filter(|v| !v.is_nan()) {
            assert!((0.0..=100.0).contains(&v), "RSI out of bounds: {v}");
        }
    }

    #[test]
    fn short_series_is_all_nan() {
        let bars = make_bars(&[1.0, 2.0, 3.0]);
        let out = Rsi::new(14).compute(&bars);
        assert!(out.iter().all(|v| v.is_nan()));
    }
}
