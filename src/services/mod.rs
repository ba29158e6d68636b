pub mod classifier;
pub mod indicator_service;
pub mod indicators;
pub mod price_history;
pub mod volume_trend;

pub use indicator_service::IndicatorService;
pub use price_history::{PriceHistoryStore, PriceSeries};
pub use volume_trend::{Jitter, NoJitter, UniformJitter, VolumeTrendAggregator};
