//! MACD (Moving Average Convergence Divergence) indicator.

use super::{Ema, Indicator};

/// MACD line only: `EMA(fast) - EMA(slow)` over the same full window.
///
/// No signal line or histogram is produced.
pub struct Macd {
    fast: Ema,
    slow: Ema,
}

impl Default for Macd {
    fn default() -> Self {
        Self::new(12, 26)
    }
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize) -> Self {
        Self {
            fast: Ema::new(fast_period),
            slow: Ema::new(slow_period),
        }
    }
}

impl Indicator for Macd {
    fn min_periods(&self) -> usize {
        self.slow.period().max(self.fast.period())
    }

    fn default_value(&self, _prices: &[f64]) -> f64 {
        0.0
    }

    fn calculate(&self, prices: &[f64]) -> f64 {
        self.fast.compute(prices) - self.slow.compute(prices)
    }
}
