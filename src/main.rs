mod api;

use axum::Router;
use marketpulse::config::Config;
use marketpulse::services::IndicatorService;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub indicator_service: Arc<IndicatorService>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let indicator_service = IndicatorService::from_config(&config);
        Self {
            config: Arc::new(config),
            indicator_service,
        }
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marketpulse=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Starting MarketPulse on {}:{} (window {}, volume scale {}, jitter {})",
        config.host,
        config.port,
        config.history_capacity,
        config.volume_trend_scale,
        config.volume_jitter_max
    );

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("MarketPulse listening on {}", addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
