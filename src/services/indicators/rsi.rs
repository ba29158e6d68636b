//! Relative Strength Index (RSI) indicator.

use super::Indicator;

/// RSI (Relative Strength Index) indicator.
///
/// Compares the average gain to the average loss over the most recent
/// `period` one-step price changes. Averages are simple (not Wilder-smoothed)
/// and always divided by `period`. Values range from 0-100:
/// - Below 30: Oversold
/// - Above 70: Overbought
///
/// With no losses in the lookback the ratio is undefined; RSI is then 100
/// if there were gains and 50 for a flat window.
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self {
            period: period.max(1),
        }
    }

    pub fn period(&self) -> usize {
        self.period
    }
}

impl Indicator for Rsi {
    fn min_periods(&self) -> usize {
        self.period
    }

    fn default_value(&self, _prices: &[f64]) -> f64 {
        50.0
    }

    fn calculate(&self, prices: &[f64]) -> f64 {
        let start = prices.len().saturating_sub(self.period + 1);

        let mut gains = 0.0;
        let mut losses = 0.0;
        for pair in prices[start..].windows(2) {
            let change = pair[1] - pair[0];
            if change >= 0.0 {
                gains += change;
            } else {
                losses -= change;
            }
        }

        let avg_gain = gains / self.period as f64;
        let avg_loss = losses / self.period as f64;

        if avg_loss == 0.0 {
            return if avg_gain > 0.0 { 100.0 } else { 50.0 };
        }

        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_min_periods() {
        assert_eq!(Rsi::default().min_periods(), 14);
        assert_eq!(Rsi::new(7).min_periods(), 7);
    }

    #[test]
    fn test_rsi_insufficient_data() {
        let prices: Vec<f64> = (0..13).map(|i| 100.0 + i as f64).collect();
        assert_eq!(Rsi::default().compute(&prices), 50.0);
        assert_eq!(Rsi::default().compute(&[]), 50.0);
    }

    #[test]
    fn test_rsi_only_gains_is_100() {
        let prices: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        assert_eq!(Rsi::default().compute(&prices), 100.0);
    }

    #[test]
    fn test_rsi_only_losses_is_0() {
        let prices: Vec<f64> = (0..20).map(|i| 200.0 - i as f64).collect();
        assert_eq!(Rsi::default().compute(&prices), 0.0);
    }

    #[test]
    fn test_rsi_flat_is_50() {
        let prices = vec![100.0; 20];
        assert_eq!(Rsi::default().compute(&prices), 50.0);
    }

    #[test]
    fn test_rsi_uses_most_recent_changes() {
        // Early losses fall outside the 14-change lookback.
        let mut prices: Vec<f64> = (0..6).map(|i| 200.0 - i as f64 * 10.0).collect();
        let last = *prices.last().unwrap();
        prices.extend((1..=15).map(|i| last + i as f64));
        assert_eq!(prices.len(), 21);
        assert_eq!(Rsi::default().compute(&prices), 100.0);
    }

    #[test]
    fn test_rsi_mixed_value() {
        let prices = [
            100.0, 102.0, 101.0, 105.0, 107.0, 106.0, 110.0, 108.0, 112.0, 115.0, 113.0, 117.0,
            120.0, 118.0,
        ];
        // Gains 26, losses 8: RS = 3.25
        let expected = 100.0 - 100.0 / 4.25;
        let rsi = Rsi::default().compute(&prices);
        assert!((rsi - expected).abs() < 1e-9, "got {}", rsi);
    }

    #[test]
    fn test_rsi_value_range() {
        let prices: Vec<f64> = (0..20)
            .map(|i| 100.0 + (i as f64 * 1.7).sin() * 5.0)
            .collect();
        let rsi = Rsi::default().compute(&prices);
        assert!((0.0..=100.0).contains(&rsi));
    }
}
