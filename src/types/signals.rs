use serde::{Deserialize, Serialize};

/// Categorical label derived from an indicator's raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    Bullish,
    Bearish,
    Neutral,
    Overbought,
    Oversold,
    #[serde(rename = "Strong Trend")]
    StrongTrend,
}

impl Signal {
    /// Get display label for this signal.
    pub fn label(&self) -> &'static str {
        match self {
            Signal::Bullish => "Bullish",
            Signal::Bearish => "Bearish",
            Signal::Neutral => "Neutral",
            Signal::Overbought => "Overbought",
            Signal::Oversold => "Oversold",
            Signal::StrongTrend => "Strong Trend",
        }
    }

    /// Presentational color for dashboards.
    pub fn color_hint(&self) -> &'static str {
        match self {
            Signal::Bullish => "green",
            Signal::Bearish => "red",
            Signal::Overbought => "orange",
            Signal::Oversold => "blue",
            Signal::StrongTrend => "purple",
            Signal::Neutral => "yellow",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Trade recommendation derived from an indicator's raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Prediction {
    Buy,
    Sell,
    Hold,
}

impl Prediction {
    pub fn label(&self) -> &'static str {
        match self {
            Prediction::Buy => "BUY",
            Prediction::Sell => "SELL",
            Prediction::Hold => "HOLD",
        }
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Indicators reported for an instrument, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Rsi,
    Macd,
    MovingAverage,
    Bollinger,
    VolumeTrend,
    Momentum,
}

impl IndicatorKind {
    /// All indicators in the fixed display order.
    pub const ALL: [IndicatorKind; 6] = [
        IndicatorKind::Rsi,
        IndicatorKind::Macd,
        IndicatorKind::MovingAverage,
        IndicatorKind::Bollinger,
        IndicatorKind::VolumeTrend,
        IndicatorKind::Momentum,
    ];

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rsi" => Some(Self::Rsi),
            "macd" => Some(Self::Macd),
            "ma" | "sma" | "moving_average" => Some(Self::MovingAverage),
            "bollinger" | "bb" => Some(Self::Bollinger),
            "volume" | "volume_trend" => Some(Self::VolumeTrend),
            "momentum" => Some(Self::Momentum),
            _ => None,
        }
    }

    /// Get display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rsi => "RSI (14)",
            Self::Macd => "MACD",
            Self::MovingAverage => "Moving Average (20)",
            Self::Bollinger => "Bollinger Bands",
            Self::VolumeTrend => "Volume Trend",
            Self::Momentum => "Momentum",
        }
    }
}

/// Direction of the latest price move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

/// One computed indicator with its classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorValue {
    pub kind: IndicatorKind,
    /// Display name (e.g., "RSI (14)").
    pub name: String,
    /// Raw indicator value.
    pub value: f64,
    pub signal: Signal,
    pub color_hint: String,
    pub prediction: Prediction,
}

impl IndicatorValue {
    pub fn new(kind: IndicatorKind, value: f64, signal: Signal, prediction: Prediction) -> Self {
        Self {
            kind,
            name: kind.name().to_string(),
            value,
            signal,
            color_hint: signal.color_hint().to_string(),
            prediction,
        }
    }
}

/// All indicators for an instrument at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    pub instrument: String,
    /// Most recent observed price, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_price: Option<f64>,
    /// Number of observations in the window.
    pub samples: usize,
    pub trend: Trend,
    pub indicators: Vec<IndicatorValue>,
    /// Unix timestamp (milliseconds) when calculated.
    pub timestamp: i64,
}
