//! Bollinger Bands %B indicator.

use super::{Indicator, Sma};

/// Population standard deviation (divides by N).
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Position of the latest price inside the Bollinger Bands, as a percentage.
///
/// - Middle band: SMA(20)
/// - Upper band: SMA + 2 * StdDev
/// - Lower band: SMA - 2 * StdDev
///
/// `%B = (price - lower) / (upper - lower) * 100`; 0 sits on the lower band,
/// 100 on the upper band. A window with zero spread reports 50.
pub struct BollingerBands {
    period: usize,
    std_dev_multiplier: f64,
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev_multiplier: 2.0,
        }
    }
}

impl BollingerBands {
    pub fn new(period: usize, std_dev_multiplier: f64) -> Self {
        Self {
            period: period.max(1),
            std_dev_multiplier,
        }
    }
}

impl Indicator for BollingerBands {
    fn min_periods(&self) -> usize {
        self.period
    }

    fn default_value(&self, _prices: &[f64]) -> f64 {
        50.0
    }

    fn calculate(&self, prices: &[f64]) -> f64 {
        let Some(start) = prices.len().checked_sub(self.period) else {
            return self.default_value(prices);
        };
        let recent = &prices[start..];
        let Some((&current_price, _)) = recent.split_last() else {
            return self.default_value(prices);
        };

        // Rounding leaves a tiny nonzero std dev on some flat windows.
        if recent.iter().all(|p| *p == recent[0]) {
            return 50.0;
        }

        let middle = Sma::new(self.period).compute(recent);
        let std_dev = population_std_dev(recent);

        let upper = middle + self.std_dev_multiplier * std_dev;
        let lower = middle - self.std_dev_multiplier * std_dev;
        let band_width = upper - lower;

        if band_width > 0.0 && band_width.is_finite() {
            (current_price - lower) / band_width * 100.0
        } else {
            50.0
        }
    }
}
