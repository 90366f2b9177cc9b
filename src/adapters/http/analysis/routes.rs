//! HTTP routes for analysis endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use http::{HeaderValue, Method};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

use crate::config::ServerConfig;

use super::handlers::{
    analyze_file, analyze_report, get_model_status, health, root, AnalysisAppState,
};

/// Creates the analysis router with all endpoints.
pub fn analysis_router() -> Router<AnalysisAppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/analyze", post(analyze_report))
        .route("/analyze-files", post(analyze_file))
        .route("/models/status", get(get_model_status))
}

/// Full service router with CORS, tracing, and request timeout layers.
pub fn build_router(state: AnalysisAppState, server: &ServerConfig) -> Router {
    analysis_router()
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}
