//! Indicator service: records prices and computes labelled indicators.

use crate::config::Config;
use crate::services::classifier::{self, moving_average_spread};
use crate::services::indicators::{trend, BollingerBands, Indicator, Macd, Momentum, Rsi, Sma};
use crate::services::price_history::PriceHistoryStore;
use crate::services::volume_trend::{Jitter, NoJitter, UniformJitter, VolumeTrendAggregator};
use crate::types::{
    IndicatorKind, IndicatorSnapshot, IndicatorValue, Prediction, Signal, VolumeRecord,
};
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Volume trend reported before any volume feed has been seen.
pub const NEUTRAL_VOLUME_TREND: f64 = 50.0;

/// Period of the SMA displayed as the moving average.
pub const DISPLAY_MA_PERIOD: usize = 20;

/// Computes the indicator set for one price window.
///
/// The moving average displays SMA(20) but is classified on the price's
/// spread over SMA(10).
pub fn indicators_for_window(prices: &[f64], volume_trend: f64) -> Vec<IndicatorValue> {
    IndicatorKind::ALL
        .iter()
        .map(|&kind| {
            let (value, raw) = match kind {
                IndicatorKind::Rsi => {
                    let v = Rsi::default().compute(prices);
                    (v, v)
                }
                IndicatorKind::Macd => {
                    let v = Macd::default().compute(prices);
                    (v, v)
                }
                IndicatorKind::MovingAverage => (
                    Sma::new(DISPLAY_MA_PERIOD).compute(prices),
                    moving_average_spread(prices),
                ),
                IndicatorKind::Bollinger => {
                    let v = BollingerBands::default().compute(prices);
                    (v, v)
                }
                IndicatorKind::VolumeTrend => (volume_trend, volume_trend),
                IndicatorKind::Momentum => {
                    let v = Momentum.compute(prices);
                    (v, v)
                }
            };

            IndicatorValue::new(
                kind,
                value,
                classifier::classify_signal(kind, raw),
                classifier::classify_prediction(kind, raw),
            )
        })
        .collect()
}

/// Owns the price history and the latest volume trend.
pub struct IndicatorService {
    history: PriceHistoryStore,
    aggregator: VolumeTrendAggregator,
    jitter: Box<dyn Jitter>,
    volume_trend: RwLock<Option<f64>>,
}

impl IndicatorService {
    /// Create a deterministic service.
    pub fn new(capacity: usize, volume_scale: f64) -> Arc<Self> {
        Self::with_jitter(capacity, volume_scale, Box::new(NoJitter))
    }

    /// Create a service that adds `jitter` to every volume trend update.
    pub fn with_jitter(capacity: usize, volume_scale: f64, jitter: Box<dyn Jitter>) -> Arc<Self> {
        Arc::new(Self {
            history: PriceHistoryStore::new(capacity),
            aggregator: VolumeTrendAggregator::new(volume_scale),
            jitter,
            volume_trend: RwLock::new(None),
        })
    }

    /// Create a service from configuration.
    pub fn from_config(config: &Config) -> Arc<Self> {
        let jitter: Box<dyn Jitter> = if config.volume_jitter_max > 0.0 {
            Box::new(UniformJitter::new(config.volume_jitter_max))
        } else {
            Box::new(NoJitter)
        };
        Self::with_jitter(config.history_capacity, config.volume_trend_scale, jitter)
    }

    /// Record an observed price. Calls must be in chronological order per instrument.
    pub fn record_price(&self, instrument: &str, price: f64) {
        self.history.append(instrument, price);
    }

    /// Current price window for an instrument.
    pub fn window(&self, instrument: &str) -> Vec<f64> {
        self.history.window(instrument)
    }

    /// Drop all history for an instrument.
    pub fn forget(&self, instrument: &str) -> bool {
        self.history.remove(instrument)
    }

    pub fn history(&self) -> &PriceHistoryStore {
        &self.history
    }

    /// Recompute the volume trend from stock-list feeds and keep it.
    pub fn update_volume_trend(&self, sources: &[Vec<VolumeRecord>]) -> f64 {
        let score = self
            .aggregator
            .score_with_jitter(sources, self.jitter.as_ref());
        let mut current = self
            .volume_trend
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = Some(score);
        score
    }

    /// Latest volume trend, neutral until the first update.
    pub fn volume_trend(&self) -> f64 {
        self.volume_trend
            .read()
            .map(|v| *v)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
            .unwrap_or(NEUTRAL_VOLUME_TREND)
    }

    /// Indicators for an instrument in display order.
    pub fn compute_indicators(&self, instrument: &str) -> Vec<IndicatorValue> {
        let window = self.history.window(instrument);
        indicators_for_window(&window, self.volume_trend())
    }

    /// Indicators plus window metadata for an instrument.
    pub fn snapshot(&self, instrument: &str) -> IndicatorSnapshot {
        let window = self.history.window(instrument);
        let indicators = indicators_for_window(&window, self.volume_trend());

        debug!(
            "Computed {} indicators for {} from {} prices",
            indicators.len(),
            instrument,
            window.len()
        );

        IndicatorSnapshot {
            instrument: instrument.to_string(),
            last_price: window.last().copied(),
            samples: window.len(),
            trend: trend(&window),
            indicators,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn compute_signal(&self, kind: IndicatorKind, value: f64) -> Signal {
        classifier::classify_signal(kind, value)
    }

    pub fn compute_prediction(&self, kind: IndicatorKind, value: f64) -> Prediction {
        classifier::classify_prediction(kind, value)
    }
}
