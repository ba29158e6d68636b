//! Technical indicator implementations.
//!
//! Every indicator is a pure function of a price window (oldest first).
//! Windows shorter than [`Indicator::min_periods`] yield the indicator's
//! neutral default instead of an error, so a freshly opened market reads
//! as "no opinion" until enough history has accumulated.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod momentum;
pub mod rsi;
pub mod sma;

pub use bollinger::{population_std_dev, BollingerBands};
pub use ema::Ema;
pub use macd::Macd;
pub use momentum::{trend, Momentum};
pub use rsi::Rsi;
pub use sma::Sma;

/// Trait for implementing technical indicators over a price window.
pub trait Indicator: Send + Sync {
    /// Minimum number of prices required for calculation.
    fn min_periods(&self) -> usize;

    /// Value reported when the window is too short.
    fn default_value(&self, prices: &[f64]) -> f64;

    /// Calculate over the window. Windows shorter than `min_periods` must not
    /// panic; implementations return the default for them.
    fn calculate(&self, prices: &[f64]) -> f64;

    /// Calculate, falling back to the default on short windows.
    fn compute(&self, prices: &[f64]) -> f64 {
        if prices.len() < self.min_periods() {
            self.default_value(prices)
        } else {
            self.calculate(prices)
        }
    }
}

/// Last price of the window, or 0 if empty.
pub(crate) fn last_or_zero(prices: &[f64]) -> f64 {
    prices.last().copied().unwrap_or(0.0)
}
