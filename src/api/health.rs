use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    instruments: usize,
    window_capacity: usize,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        instruments: state.indicator_service.history().len(),
        window_capacity: state.config.history_capacity,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/health", get(health))
}
