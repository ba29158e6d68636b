use crate::services::price_history::DEFAULT_CAPACITY;
use crate::services::volume_trend::DEFAULT_SCALE;
use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Prices kept per instrument.
    pub history_capacity: usize,
    /// Divisor applied to summed volumes (in lakhs) for the volume trend.
    pub volume_trend_scale: f64,
    /// Upper bound of demo noise added to the volume trend (0 = off).
    pub volume_jitter_max: f64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            history_capacity: env::var("PRICE_HISTORY_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v: &usize| *v > 0)
                .unwrap_or(DEFAULT_CAPACITY),
            volume_trend_scale: env::var("VOLUME_TREND_SCALE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v: &f64| *v > 0.0)
                .unwrap_or(DEFAULT_SCALE),
            volume_jitter_max: env::var("VOLUME_JITTER_MAX")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v: &f64| v.is_finite() && *v >= 0.0)
                .unwrap_or(0.0),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            history_capacity: DEFAULT_CAPACITY,
            volume_trend_scale: DEFAULT_SCALE,
            volume_jitter_max: 0.0,
        }
    }
}
