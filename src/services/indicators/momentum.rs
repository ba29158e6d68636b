//! One-step momentum and trend direction.

use super::Indicator;
use crate::types::Trend;

/// Percent change between the two most recent prices.
///
/// A zero previous price reports 0.
#[derive(Default)]
pub struct Momentum;

impl Indicator for Momentum {
    fn min_periods(&self) -> usize {
        2
    }

    fn default_value(&self, _prices: &[f64]) -> f64 {
        0.0
    }

    fn calculate(&self, prices: &[f64]) -> f64 {
        let &[.., previous, latest] = prices else {
            return self.default_value(prices);
        };

        if previous == 0.0 {
            return 0.0;
        }

        (latest - previous) / previous * 100.0
    }
}

/// Direction of the latest move: compares the two most recent prices.
pub fn trend(prices: &[f64]) -> Trend {
    match prices {
        [.., previous, latest] if latest > previous => Trend::Bullish,
        [.., previous, latest] if latest < previous => Trend::Bearish,
        _ => Trend::Neutral,
    }
}
