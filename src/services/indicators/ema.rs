//! Exponential Moving Average (EMA) indicator.

use super::{last_or_zero, Indicator};

/// EMA (Exponential Moving Average) indicator.
///
/// Seeded with the first price of the window, then smoothed with
/// multiplier `2 / (period + 1)` across the whole window, not only the
/// last `period` prices.
pub struct Ema {
    period: usize,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self {
            period: period.max(1),
        }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    fn multiplier(&self) -> f64 {
        2.0 / (self.period as f64 + 1.0)
    }
}

impl Indicator for Ema {
    fn min_periods(&self) -> usize {
        self.period
    }

    fn default_value(&self, prices: &[f64]) -> f64 {
        last_or_zero(prices)
    }

    fn calculate(&self, prices: &[f64]) -> f64 {
        let multiplier = self.multiplier();
        let mut iter = prices.iter();
        let Some(&seed) = iter.next() else {
            return 0.0;
        };

        iter.fold(seed, |ema, &price| (price - ema) * multiplier + ema)
    }
}
