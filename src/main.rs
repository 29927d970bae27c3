use anyhow::Context;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use voice_agent::application::CallService;
use voice_agent::config::Config;
use voice_agent::infrastructure::audit::CallEventLogger;
use voice_agent::infrastructure::twilio::TwilioClient;
use voice_agent::interface::api::{build_router, init_metrics, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Voice Agent");

    // Load configuration
    let config = Config::load().context("failed to load configuration")?;
    info!("Configuration loaded: {:?}", config);

    if config.twilio.credentials().is_err() {
        warn!("Twilio credentials are incomplete; call requests will fail until they are set");
    }

    let provider = TwilioClient::from_config(&config.twilio)
        .context("failed to build Twilio client")?;
    let calls = CallService::new(&config, Arc::new(provider), Arc::new(CallEventLogger::new()));

    // Initialize metrics exporter
    info!("Initializing Prometheus metrics exporter");
    let prometheus_handle = init_metrics().context("failed to install metrics recorder")?;

    let app = build_router(AppState::new(calls), Some(prometheus_handle));

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address()))?;

    info!("REST API server listening on {}", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("API server failed")?;

    info!("Shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}
