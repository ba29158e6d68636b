//! Price history endpoints.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::ApiResponse;
use crate::AppState;
use marketpulse::error::{AppError, Result};

/// Body of a price observation.
#[derive(Debug, Deserialize)]
pub struct RecordPriceRequest {
    pub price: f64,
}

/// Current window for an instrument.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceWindow {
    pub instrument: String,
    pub prices: Vec<f64>,
    pub capacity: usize,
}

/// Create the prices router.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/:instrument",
        get(get_window).post(record_price).delete(forget_instrument),
    )
}

fn window_for(state: &AppState, instrument: String) -> PriceWindow {
    let history = state.indicator_service.history();
    PriceWindow {
        prices: history.window(&instrument),
        capacity: history.capacity(),
        instrument,
    }
}

/// Get the price window for an instrument.
async fn get_window(
    State(state): State<AppState>,
    Path(instrument): Path<String>,
) -> Json<ApiResponse<PriceWindow>> {
    Json(ApiResponse::new(window_for(&state, instrument)))
}

/// Record an observed price.
async fn record_price(
    State(state): State<AppState>,
    Path(instrument): Path<String>,
    Json(body): Json<RecordPriceRequest>,
) -> Result<Json<ApiResponse<PriceWindow>>> {
    if !body.price.is_finite() || body.price <= 0.0 {
        warn!("Rejected price {} for {}", body.price, instrument);
        return Err(AppError::BadRequest(format!(
            "Price must be a positive number, got {}",
            body.price
        )));
    }

    state.indicator_service.record_price(&instrument, body.price);
    Ok(Json(ApiResponse::new(window_for(&state, instrument))))
}

/// Drop the history of an instrument.
async fn forget_instrument(
    State(state): State<AppState>,
    Path(instrument): Path<String>,
) -> Result<Json<ApiResponse<PriceWindow>>> {
    if !state.indicator_service.forget(&instrument) {
        return Err(AppError::NotFound(format!(
            "No price history for {}",
            instrument
        )));
    }

    Ok(Json(ApiResponse::new(PriceWindow {
        instrument,
        prices: Vec::new(),
        capacity: state.indicator_service.history().capacity(),
    })))
}
