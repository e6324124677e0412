//! Moving Average Convergence/Divergence.
//!
//! macd = EMA(fast) - EMA(slow) of close prices; signal = EMA of the macd
//! line over its valid region. With the standard 12/26/9 parameters the
//! macd line starts at index 25 and the signal at index 33.

use super::ema::ema_of_series;
use crate::domain::Bar;

#[derive(Debug, Clone)]
pub struct Macd {
    fast: usize,
    slow: usize,
    signal_period: usize,
}

/// The two output lines, aligned with the input bars.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
}

impl Macd {
    pub fn new(fast: usize, slow: usize, signal_period: usize) -> Self {
        assert!(fast >= 1 && signal_period >= 1, "MACD periods must be >= 1");
        assert!(fast < slow, "MACD fast period must be below slow period");
        Self {
            fast,
            slow,
            signal_period,
        }
    }

    /// The conventional 12/26/9 configuration.
    pub fn standard() -> Self {
        Self::new(12, 26, 9)
    }

    pub fn compute(&self, bars: &[Bar]) -> MacdSeries {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let n = closes.len();

        let fast = ema_of_series(&closes, self.fast);
        let slow = ema_of_series(&closes, self.slow);

        let mut macd = vec![f64::NAN; n];
        for i in 0..n {
            if !fast[i].is_nan() && !slow[i].is_nan() {
                macd[i] = fast[i] - slow[i];
            }
        }

        // The signal EMA runs over the macd line's valid tail so its seed
        // window never sees warmup NaN.
        let mut signal = vec![f64::NAN; n];
        if let Some(start) = macd.iter().position(|v| !v.is_nan()) {
            let tail = ema_of_series(&macd[start..], self.signal_period);
            for (offset, v) in tail.into_iter().enumerate() {
                signal[start + offset] = v;
            }
        }

        MacdSeries { macd, signal }
    }
}
