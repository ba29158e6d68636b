//! Threshold rules mapping raw indicator values to signals and predictions.
//!
//! Signal and prediction are separate threshold functions over the same raw
//! value. All comparisons are strict. Non-finite inputs map to
//! `Neutral` / `HOLD`.

use crate::services::indicators::{Indicator, Sma};
use crate::types::{IndicatorKind, Prediction, Signal};

/// Period of the SMA the moving-average signal compares the price against.
pub const MA_SIGNAL_PERIOD: usize = 10;

pub fn rsi_signal(rsi: f64) -> Signal {
    match rsi {
        v if !v.is_finite() => Signal::Neutral,
        v if v > 70.0 => Signal::Overbought,
        v if v < 30.0 => Signal::Oversold,
        v if v > 50.0 => Signal::Bullish,
        _ => Signal::Bearish,
    }
}

pub fn rsi_prediction(rsi: f64) -> Prediction {
    match rsi {
        v if !v.is_finite() => Prediction::Hold,
        v if v < 30.0 => Prediction::Buy,
        v if v > 70.0 => Prediction::Sell,
        _ => Prediction::Hold,
    }
}

pub fn macd_signal(macd: f64) -> Signal {
    match macd {
        v if !v.is_finite() => Signal::Neutral,
        v if v > 0.0 => Signal::Bullish,
        v if v < 0.0 => Signal::Bearish,
        _ => Signal::Neutral,
    }
}

pub fn macd_prediction(macd: f64) -> Prediction {
    match macd {
        v if !v.is_finite() => Prediction::Hold,
        v if v > 1.0 => Prediction::Buy,
        v if v < -1.0 => Prediction::Sell,
        _ => Prediction::Hold,
    }
}

/// Latest price minus SMA(10) of the window.
///
/// This is the raw input of the moving-average rules, whatever SMA period is
/// displayed alongside it. Windows with fewer than two prices report 0.
pub fn moving_average_spread(prices: &[f64]) -> f64 {
    let Some(&current) = prices.last() else {
        return 0.0;
    };
    if prices.len() < 2 {
        return 0.0;
    }

    current - Sma::new(MA_SIGNAL_PERIOD).compute(prices)
}

/// Signal from the price's spread over its SMA(10).
pub fn moving_average_signal(spread: f64) -> Signal {
    match spread {
        v if !v.is_finite() => Signal::Neutral,
        v if v > 0.0 => Signal::Bullish,
        v if v < 0.0 => Signal::Bearish,
        _ => Signal::Neutral,
    }
}

pub fn moving_average_prediction(spread: f64) -> Prediction {
    match moving_average_signal(spread) {
        Signal::Bullish => Prediction::Buy,
        Signal::Bearish => Prediction::Sell,
        _ => Prediction::Hold,
    }
}

pub fn bollinger_signal(percent_b: f64) -> Signal {
    match percent_b {
        v if !v.is_finite() => Signal::Neutral,
        v if v > 80.0 => Signal::Overbought,
        v if v < 20.0 => Signal::Oversold,
        v if v > 50.0 => Signal::Bullish,
        _ => Signal::Bearish,
    }
}

pub fn bollinger_prediction(percent_b: f64) -> Prediction {
    match percent_b {
        v if !v.is_finite() => Prediction::Hold,
        v if v < 20.0 => Prediction::Buy,
        v if v > 80.0 => Prediction::Sell,
        _ => Prediction::Hold,
    }
}

pub fn momentum_signal(momentum: f64) -> Signal {
    match momentum {
        v if !v.is_finite() => Signal::Neutral,
        v if v.abs() > 2.0 => Signal::StrongTrend,
        v if v > 0.5 => Signal::Bullish,
        v if v < -0.5 => Signal::Bearish,
        _ => Signal::Neutral,
    }
}

pub fn momentum_prediction(momentum: f64) -> Prediction {
    match momentum {
        v if !v.is_finite() => Prediction::Hold,
        v if v > 1.0 => Prediction::Buy,
        v if v < -1.0 => Prediction::Sell,
        _ => Prediction::Hold,
    }
}

pub fn volume_trend_signal(score: f64) -> Signal {
    match score {
        v if !v.is_finite() => Signal::Neutral,
        v if v > 60.0 => Signal::Bullish,
        v if v < 40.0 => Signal::Bearish,
        _ => Signal::Neutral,
    }
}

pub fn volume_trend_prediction(score: f64) -> Prediction {
    match score {
        v if !v.is_finite() => Prediction::Hold,
        v if v > 70.0 => Prediction::Buy,
        v if v < 30.0 => Prediction::Sell,
        _ => Prediction::Hold,
    }
}

/// Signal for an indicator's raw value.
///
/// For [`IndicatorKind::MovingAverage`] the raw value is the spread from
/// [`moving_average_spread`].
pub fn classify_signal(kind: IndicatorKind, value: f64) -> Signal {
    match kind {
        IndicatorKind::Rsi => rsi_signal(value),
        IndicatorKind::Macd => macd_signal(value),
        IndicatorKind::MovingAverage => moving_average_signal(value),
        IndicatorKind::Bollinger => bollinger_signal(value),
        IndicatorKind::VolumeTrend => volume_trend_signal(value),
        IndicatorKind::Momentum => momentum_signal(value),
    }
}

/// Prediction for an indicator's raw value.
pub fn classify_prediction(kind: IndicatorKind, value: f64) -> Prediction {
    match kind {
        IndicatorKind::Rsi => rsi_prediction(value),
        IndicatorKind::Macd => macd_prediction(value),
        IndicatorKind::MovingAverage => moving_average_prediction(value),
        IndicatorKind::Bollinger => bollinger_prediction(value),
        IndicatorKind::VolumeTrend => volume_trend_prediction(value),
        IndicatorKind::Momentum => momentum_prediction(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_boundaries() {
        assert_eq!(rsi_signal(69.999), Signal::Bullish);
        assert_eq!(rsi_signal(70.0), Signal::Bullish);
        assert_eq!(rsi_signal(70.001), Signal::Overbought);
        assert_eq!(rsi_signal(30.0), Signal::Bearish);
        assert_eq!(rsi_signal(29.999), Signal::Oversold);
        assert_eq!(rsi_signal(50.0), Signal::Bearish);

        assert_eq!(rsi_prediction(70.0), Prediction::Hold);
        assert_eq!(rsi_prediction(70.001), Prediction::Sell);
        assert_eq!(rsi_prediction(30.0), Prediction::Hold);
        assert_eq!(rsi_prediction(29.999), Prediction::Buy);
    }

    #[test]
    fn test_macd_rules() {
        assert_eq!(macd_signal(0.3), Signal::Bullish);
        assert_eq!(macd_signal(-0.3), Signal::Bearish);
        assert_eq!(macd_signal(0.0), Signal::Neutral);
        assert_eq!(macd_prediction(0.3), Prediction::Hold);
        assert_eq!(macd_prediction(1.5), Prediction::Buy);
        assert_eq!(macd_prediction(-1.5), Prediction::Sell);
        assert_eq!(macd_prediction(1.0), Prediction::Hold);
    }

    #[test]
    fn test_moving_average_spread() {
        assert_eq!(moving_average_spread(&[]), 0.0);
        assert_eq!(moving_average_spread(&[5.0]), 0.0);
        // Fewer than 10 prices: SMA falls back to the last price.
        assert_eq!(moving_average_spread(&[1.0, 9.0]), 0.0);

        let rising: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        assert_eq!(moving_average_spread(&rising), 10.0 - 5.5);
    }

    #[test]
    fn test_moving_average_rules() {
        assert_eq!(moving_average_signal(1.0), Signal::Bullish);
        assert_eq!(moving_average_signal(-1.0), Signal::Bearish);
        assert_eq!(moving_average_signal(0.0), Signal::Neutral);
        assert_eq!(moving_average_prediction(1.0), Prediction::Buy);
        assert_eq!(moving_average_prediction(-1.0), Prediction::Sell);
        assert_eq!(moving_average_prediction(0.0), Prediction::Hold);
    }

    #[test]
    fn test_bollinger_rules() {
        assert_eq!(bollinger_signal(80.5), Signal::Overbought);
        assert_eq!(bollinger_signal(80.0), Signal::Bullish);
        assert_eq!(bollinger_signal(19.0), Signal::Oversold);
        assert_eq!(bollinger_signal(50.0), Signal::Bearish);
        assert_eq!(bollinger_prediction(19.0), Prediction::Buy);
        assert_eq!(bollinger_prediction(81.0), Prediction::Sell);
        assert_eq!(bollinger_prediction(50.0), Prediction::Hold);
    }

    #[test]
    fn test_momentum_rules() {
        assert_eq!(momentum_signal(2.5), Signal::StrongTrend);
        assert_eq!(momentum_signal(-2.5), Signal::StrongTrend);
        assert_eq!(momentum_signal(2.0), Signal::Bullish);
        assert_eq!(momentum_signal(-0.6), Signal::Bearish);
        assert_eq!(momentum_signal(0.5), Signal::Neutral);
        assert_eq!(momentum_prediction(2.5), Prediction::Buy);
        assert_eq!(momentum_prediction(-1.1), Prediction::Sell);
        assert_eq!(momentum_prediction(1.0), Prediction::Hold);
    }

    #[test]
    fn test_volume_trend_rules() {
        assert_eq!(volume_trend_signal(61.0), Signal::Bullish);
        assert_eq!(volume_trend_signal(39.0), Signal::Bearish);
        assert_eq!(volume_trend_signal(60.0), Signal::Neutral);
        assert_eq!(volume_trend_prediction(71.0), Prediction::Buy);
        assert_eq!(volume_trend_prediction(29.0), Prediction::Sell);
        assert_eq!(volume_trend_prediction(70.0), Prediction::Hold);
    }

    #[test]
    fn test_non_finite_inputs_are_neutral() {
        for kind in IndicatorKind::ALL {
            for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
                assert_eq!(classify_signal(kind, value), Signal::Neutral, "{:?}", kind);
                assert_eq!(classify_prediction(kind, value), Prediction::Hold, "{:?}", kind);
            }
        }
    }
}
