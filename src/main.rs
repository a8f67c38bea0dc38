//! Main entry point for the Customer Gateway

use anyhow::Context;
use customer_gateway::{api, config::LoggingConfig, config::Settings, AppState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Load and validate configuration; any fault here aborts the process
    // with a non-zero exit status and a diagnostic.
    let settings = Settings::load()?;
    settings.validate()?;

    init_tracing(&settings.logging);

    info!(
        cors_policy = %settings.cors.policy,
        "Loaded configuration: server={}:{}",
        settings.server.host, settings.server.port
    );

    let addr = format!("{}:{}", settings.server.host, settings.server.port);

    // Create application state
    let state = Arc::new(AppState::new(settings));

    // Build the router
    let app = api::routes::create_router(state)?;

    info!("Server listening on {}", addr);

    // Start the server; runs until terminated externally.
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize logging; RUST_LOG overrides the configured level.
fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init(),
        _ => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init(),
    }
}
