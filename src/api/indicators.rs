//! Indicator, classification and volume trend endpoints.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::ApiResponse;
use crate::AppState;
use marketpulse::error::{AppError, Result};
use marketpulse::types::{IndicatorKind, IndicatorSnapshot, Prediction, Signal, VolumeRecord};

/// Stock lists (gainers, losers, volume leaders, ...) to aggregate.
#[derive(Debug, Deserialize)]
pub struct VolumeTrendRequest {
    pub sources: Vec<Vec<VolumeRecord>>,
}

#[derive(Debug, Serialize)]
pub struct VolumeTrendResponse {
    pub score: f64,
}

/// Classification of a single raw value.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub kind: IndicatorKind,
    pub value: f64,
    pub signal: Signal,
    pub color_hint: &'static str,
    pub prediction: Prediction,
}

/// Create the indicators router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/indicators/:instrument", get(get_indicators))
        .route("/api/volume-trend", post(update_volume_trend))
        .route("/api/classify/:kind/:value", get(classify))
}

/// Get all indicators for an instrument.
async fn get_indicators(
    State(state): State<AppState>,
    Path(instrument): Path<String>,
) -> Result<Json<ApiResponse<IndicatorSnapshot>>> {
    if !state.indicator_service.history().contains(&instrument) {
        return Err(AppError::NotFound(format!(
            "No price history for {}",
            instrument
        )));
    }

    Ok(Json(ApiResponse::new(
        state.indicator_service.snapshot(&instrument),
    )))
}

/// Recompute the volume trend from stock-list feeds.
async fn update_volume_trend(
    State(state): State<AppState>,
    Json(body): Json<VolumeTrendRequest>,
) -> Json<ApiResponse<VolumeTrendResponse>> {
    let score = state.indicator_service.update_volume_trend(&body.sources);
    Json(ApiResponse::new(VolumeTrendResponse { score }))
}

/// Classify a raw indicator value.
async fn classify(
    State(state): State<AppState>,
    Path((kind, value)): Path<(String, f64)>,
) -> Result<Json<ApiResponse<Classification>>> {
    let kind = IndicatorKind::from_str(&kind)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown indicator: {}", kind)))?;

    let signal = state.indicator_service.compute_signal(kind, value);
    let prediction = state.indicator_service.compute_prediction(kind, value);

    Ok(Json(ApiResponse::new(Classification {
        kind,
        value,
        signal,
        color_hint: signal.color_hint(),
        prediction,
    })))
}
