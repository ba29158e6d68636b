//! Simple Moving Average (SMA) indicator.

use super::{last_or_zero, Indicator};

/// SMA (Simple Moving Average) indicator.
///
/// Arithmetic mean of the most recent `period` prices.
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self {
            period: period.max(1),
        }
    }

    pub fn period(&self) -> usize {
        self.period
    }
}

impl Indicator for Sma {
    fn min_periods(&self) -> usize {
        self.period
    }

    fn default_value(&self, prices: &[f64]) -> f64 {
        last_or_zero(prices)
    }

    fn calculate(&self, prices: &[f64]) -> f64 {
        if prices.len() < self.period {
            return self.default_value(prices);
        }
        prices.iter().rev().take(self.period).sum::<f64>() / self.period as f64
    }
}
