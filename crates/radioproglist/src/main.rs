mod config;

use anyhow::Context;
use clap::Parser;
use radio_api::{AppState, create_app};
use radio_engine::HttpProgramSource;

use crate::config::{AppConfig, Args};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt().pretty().init();

    let config = AppConfig::load(&args).await?;
    tracing::info!(
        "Fetching programs from {} (failure policy: {})",
        config.api_endpoint,
        config.failure_policy
    );

    let upstream = HttpProgramSource::new(&config.api_endpoint)
        .with_context(|| format!("Failed to set up programs API {}", config.api_endpoint))?;

    let app_state = AppState::new(upstream, config.failure_policy, config.default_station)
        .with_base_path(config.base_path);
    let app = create_app(app_state);

    let bind_addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
