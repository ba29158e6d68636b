//! Volume trend score aggregated from stock-list feeds.
//!
//! Volumes are normalized to lakhs (100,000 shares) before aggregation, so
//! `"1.00Cr"` counts as 100 and `"50.00K"` as 0.5. The score is
//! `clamp(total / scale, 0, 100)`. Demo noise is an optional [`Jitter`]
//! applied on top and never part of the pure score.

use crate::types::{Volume, VolumeRecord};
use rand::Rng;
use tracing::{debug, warn};

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;
const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

/// Default divisor applied to the summed magnitude.
pub const DEFAULT_SCALE: f64 = 10.0;

/// Format a share count the way the market feeds display it.
pub fn format_volume(shares: f64) -> String {
    if shares >= CRORE {
        format!("{:.2}Cr", shares / CRORE)
    } else if shares >= LAKH {
        format!("{:.2}L", shares / LAKH)
    } else if shares >= THOUSAND {
        format!("{:.2}K", shares / THOUSAND)
    } else {
        shares.to_string()
    }
}

/// Parse a volume into lakhs. Unparseable or negative volumes count as 0.
pub fn parse_volume(volume: &Volume) -> f64 {
    let lakhs = match volume {
        Volume::Shares(shares) => shares / LAKH,
        Volume::Formatted(text) => match parse_formatted(text) {
            Some(lakhs) => lakhs,
            None => {
                warn!("Ignoring unparseable volume {:?}", text);
                0.0
            }
        },
    };

    if lakhs.is_finite() && lakhs > 0.0 {
        lakhs
    } else {
        0.0
    }
}

fn parse_formatted(text: &str) -> Option<f64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    let lower = cleaned.to_lowercase();

    let (number, unit) = if let Some(n) = lower.strip_suffix("cr") {
        (n, CRORE)
    } else if let Some(n) = lower.strip_suffix('l') {
        (n, LAKH)
    } else if let Some(n) = lower.strip_suffix('m') {
        (n, MILLION)
    } else if let Some(n) = lower.strip_suffix('k') {
        (n, THOUSAND)
    } else {
        (lower.as_str(), 1.0)
    };

    let magnitude: f64 = number.trim().parse().ok()?;
    Some(magnitude * unit / LAKH)
}

/// Source of additive noise for the volume trend score.
pub trait Jitter: Send + Sync {
    fn sample(&self) -> f64;
}

/// No noise: the score stays a pure function of the volumes.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoJitter;

impl Jitter for NoJitter {
    fn sample(&self) -> f64 {
        0.0
    }
}

/// Uniform noise in `[0, max)`, for live-looking demo feeds.
#[derive(Debug, Clone, Copy)]
pub struct UniformJitter {
    max: f64,
}

impl UniformJitter {
    pub fn new(max: f64) -> Self {
        Self { max }
    }
}

impl Jitter for UniformJitter {
    fn sample(&self) -> f64 {
        if self.max > 0.0 && self.max.is_finite() {
            rand::thread_rng().gen_range(0.0..self.max)
        } else {
            0.0
        }
    }
}

/// Folds gainers, losers and volume-leader lists into a 0-100 score.
#[derive(Debug, Clone, Copy)]
pub struct VolumeTrendAggregator {
    scale: f64,
}

impl Default for VolumeTrendAggregator {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
        }
    }
}

impl VolumeTrendAggregator {
    /// Create an aggregator dividing the summed lakhs by `scale`.
    /// Non-positive scales fall back to the default.
    pub fn new(scale: f64) -> Self {
        if scale > 0.0 && scale.is_finite() {
            Self { scale }
        } else {
            Self::default()
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sum of all parsed volumes across every source, in lakhs.
    pub fn total_magnitude(sources: &[Vec<VolumeRecord>]) -> f64 {
        sources
            .iter()
            .flatten()
            .map(|record| parse_volume(&record.volume))
            .sum()
    }

    /// Deterministic score in `[0, 100]`.
    pub fn score(&self, sources: &[Vec<VolumeRecord>]) -> f64 {
        self.score_with_jitter(sources, &NoJitter)
    }

    /// Score with noise added before clamping.
    pub fn score_with_jitter(&self, sources: &[Vec<VolumeRecord>], jitter: &dyn Jitter) -> f64 {
        let total = Self::total_magnitude(sources);
        let score = (total / self.scale + jitter.sample()).clamp(0.0, 100.0);

        debug!(
            "Volume trend {:.2} from {:.2} lakhs across {} sources",
            score,
            total,
            sources.len()
        );

        score
    }
}
