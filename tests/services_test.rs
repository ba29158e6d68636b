//! Unit tests for services module

use marketpulse::services::volume_trend::{format_volume, parse_volume};
use marketpulse::services::{
    IndicatorService, Jitter, PriceHistoryStore, PriceSeries, UniformJitter,
    VolumeTrendAggregator,
};
use marketpulse::types::{IndicatorKind, Prediction, Signal, Volume, VolumeRecord};
use std::sync::Arc;
use std::thread;

#[test]
fn test_store_capacity_evicts_oldest_first() {
    let store = PriceHistoryStore::default();
    for i in 1..=25 {
        store.append("X", 100.0 + i as f64);
    }

    let expected: Vec<f64> = (6..=25).map(|i| 100.0 + i as f64).collect();
    assert_eq!(store.window("X"), expected);
}

#[test]
fn test_store_custom_capacity() {
    let store = PriceHistoryStore::new(30);
    for i in 0..40 {
        store.append("BANK NIFTY", i as f64);
    }
    assert_eq!(store.window("BANK NIFTY").len(), 30);
    assert_eq!(store.latest("BANK NIFTY"), Some(39.0));
}

#[test]
fn test_store_unknown_key_is_empty() {
    let store = PriceHistoryStore::default();
    store.append("NIFTY 50", 1.0);
    assert!(store.window("nifty 50").is_empty());
}

#[test]
fn test_series_owned_by_caller() {
    let mut series = PriceSeries::default();
    for i in 0..21 {
        series.push(i as f64);
    }
    assert_eq!(series.len(), 20);
    assert_eq!(series.window()[0], 1.0);
}

#[test]
fn test_store_serialized_appends_from_threads() {
    let store = Arc::new(PriceHistoryStore::new(100));
    let handles: Vec<_> = ["A", "B", "C", "D"]
        .into_iter()
        .map(|key| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..50 {
                    store.append(key, i as f64);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for key in ["A", "B", "C", "D"] {
        let window = store.window(key);
        assert_eq!(window.len(), 50);
        assert!(window.windows(2).all(|w| w[1] > w[0]));
    }
}

#[test]
fn test_volume_trend_scenario() {
    let aggregator = VolumeTrendAggregator::default();
    let sources = vec![vec![
        VolumeRecord::new("RELIANCE", "1.00Cr"),
        VolumeRecord::new("INFY", "50.00K"),
    ]];

    assert!((VolumeTrendAggregator::total_magnitude(&sources) - 100.5).abs() < 1e-9);
    let first = aggregator.score(&sources);
    let second = aggregator.score(&sources);
    assert_eq!(first, second);
    assert!((first - 10.05).abs() < 1e-9);
}

#[test]
fn test_volume_trend_combines_sources() {
    let aggregator = VolumeTrendAggregator::new(1.0);
    let gainers = vec![VolumeRecord::new("ADANIENT", "10.00L")];
    let losers = vec![VolumeRecord::new("SBIN", 500_000.0)];
    let leaders = vec![VolumeRecord::new("TCS", "garbage")];

    let score = aggregator.score(&[gainers, losers, leaders]);
    assert!((score - 15.0).abs() < 1e-9);
}

#[test]
fn test_format_and_parse_agree() {
    let formatted = format_volume(14_300_000.0);
    assert_eq!(formatted, "1.43Cr");
    assert!((parse_volume(&Volume::Formatted(formatted)) - 143.0).abs() < 1e-9);
}

#[test]
fn test_uniform_jitter_range() {
    let jitter = UniformJitter::new(30.0);
    for _ in 0..100 {
        let sample = jitter.sample();
        assert!((0.0..30.0).contains(&sample));
    }
}

#[test]
fn test_service_with_jitter_stays_in_bounds() {
    let service = IndicatorService::with_jitter(20, 10.0, Box::new(UniformJitter::new(30.0)));
    let sources = vec![vec![VolumeRecord::new("RELIANCE", "9.00Cr")]];
    for _ in 0..50 {
        let score = service.update_volume_trend(&sources);
        assert!((90.0..=100.0).contains(&score), "got {}", score);
    }
}

#[test]
fn test_service_classification_api() {
    let service = IndicatorService::new(20, 10.0);
    assert_eq!(service.compute_signal(IndicatorKind::Rsi, 25.0), Signal::Oversold);
    assert_eq!(service.compute_prediction(IndicatorKind::Rsi, 25.0), Prediction::Buy);
    assert_eq!(
        service.compute_signal(IndicatorKind::Momentum, f64::NAN),
        Signal::Neutral
    );
    assert_eq!(
        service.compute_prediction(IndicatorKind::Bollinger, f64::INFINITY),
        Prediction::Hold
    );
}
