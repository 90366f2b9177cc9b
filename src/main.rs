//! DPR Analyzer service entry point.

use std::future::IntoFuture;
use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dpr_analyzer::adapters::http::{build_router, AnalysisAppState};
use dpr_analyzer::application::{EngineGate, ModelLoadError, ModelLoader};
use dpr_analyzer::config::{
    AppConfig, ConfigError, LogFormat, ServerConfig, ValidationError as ConfigValidationError,
};

/// Errors that stop the service from starting or keep it from running.
#[derive(Debug, Error)]
enum StartupError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigValidationError),

    #[error("failed to load models: {0}")]
    Models(#[from] ModelLoadError),

    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let addr = config.server.socket_addr()?;
    info!(
        %addr,
        environment = ?config.server.environment,
        delay_model = ?config.engine.delay_model,
        "Starting DPR analyzer"
    );

    let gate = Arc::new(EngineGate::new());
    let state = AnalysisAppState::new(Arc::clone(&gate))
        .with_verbose_errors(config.verbose_errors());
    let router = build_router(state, &config.server);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(StartupError::Bind)?;
    let server = tokio::spawn(
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .into_future(),
    );

    // Health and root answer "starting" while this runs.
    let loader = ModelLoader::new(&config);
    if let Err(err) = loader.load_models(&gate).await {
        error!(error = %err, "Model loading failed, shutting down");
        server.abort();
        return Err(err.into());
    }
    info!(%addr, "Ready to accept analysis requests");

    server.await?.map_err(StartupError::Serve)?;
    info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    match server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
