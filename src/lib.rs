//! MarketPulse - technical indicator and trading signal engine

pub mod config;
pub mod error;
pub mod services;
pub mod types;

// Re-export commonly used types
pub use services::{IndicatorService, PriceHistoryStore, VolumeTrendAggregator};
pub use types::*;
