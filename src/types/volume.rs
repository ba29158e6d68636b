use serde::{Deserialize, Serialize};

/// Traded volume as reported by a stock-list feed.
///
/// Feeds report either a raw share count or a display string with an
/// Indian-numbering suffix (`"2.45Cr"`, `"12.30L"`, `"50.00K"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Volume {
    Shares(f64),
    Formatted(String),
}

impl From<f64> for Volume {
    fn from(shares: f64) -> Self {
        Volume::Shares(shares)
    }
}

impl From<&str> for Volume {
    fn from(formatted: &str) -> Self {
        Volume::Formatted(formatted.to_string())
    }
}

/// A `{symbol, volume}` entry from a gainers, losers or volume-leaders list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeRecord {
    #[serde(default)]
    pub symbol: String,
    pub volume: Volume,
}

impl VolumeRecord {
    pub fn new(symbol: impl Into<String>, volume: impl Into<Volume>) -> Self {
        Self {
            symbol: symbol.into(),
            volume: volume.into(),
        }
    }
}
