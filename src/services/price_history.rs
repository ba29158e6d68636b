use dashmap::DashMap;
use std::collections::VecDeque;
use tracing::debug;

/// Default number of observations kept per instrument.
pub const DEFAULT_CAPACITY: usize = 20;

/// Rolling window of observed prices for one instrument, oldest first.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    prices: VecDeque<f64>,
    capacity: usize,
}

impl PriceSeries {
    /// Create an empty series holding at most `capacity` prices.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            prices: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a price, evicting the oldest ones once over capacity.
    pub fn push(&mut self, price: f64) {
        self.prices.push_back(price);

        while self.prices.len() > self.capacity {
            self.prices.pop_front();
        }
    }

    /// Snapshot of the window in insertion order.
    pub fn window(&self) -> Vec<f64> {
        self.prices.iter().copied().collect()
    }

    pub fn latest(&self) -> Option<f64> {
        self.prices.back().copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for PriceSeries {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Price windows keyed by instrument.
///
/// Series are created lazily on the first observation. Appends are
/// append-is-newest: producers feeding the same instrument must serialize
/// their writes for momentum and trend to be meaningful.
pub struct PriceHistoryStore {
    series: DashMap<String, PriceSeries>,
    capacity: usize,
}

impl PriceHistoryStore {
    /// Create a store whose series hold at most `capacity` prices.
    pub fn new(capacity: usize) -> Self {
        Self {
            series: DashMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record a price for an instrument.
    pub fn append(&self, instrument: &str, price: f64) {
        let capacity = self.capacity;
        let mut entry = self
            .series
            .entry(instrument.to_string())
            .or_insert_with(|| PriceSeries::new(capacity));
        entry.value_mut().push(price);

        debug!(
            "Recorded {} for {} ({} in window)",
            price,
            instrument,
            entry.len()
        );
    }

    /// Current window for an instrument, empty if unknown.
    pub fn window(&self, instrument: &str) -> Vec<f64> {
        self.series
            .get(instrument)
            .map(|s| s.window())
            .unwrap_or_default()
    }

    /// Most recent price for an instrument.
    pub fn latest(&self, instrument: &str) -> Option<f64> {
        self.series.get(instrument).and_then(|s| s.latest())
    }

    /// Drop the series for an instrument. Returns whether it existed.
    pub fn remove(&self, instrument: &str) -> bool {
        self.series.remove(instrument).is_some()
    }

    pub fn contains(&self, instrument: &str) -> bool {
        self.series.contains_key(instrument)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl Default for PriceHistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
