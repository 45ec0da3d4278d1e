//! HTTP server binary entry point
//!
//! Starts the EV metadata harmonization API.
//!
//! # Usage
//!
//! ```bash
//! # Start with defaults (0.0.0.0:8000)
//! cargo run -p evmeta-http-server
//!
//! # Point at a specific dataset
//! EV_PARQUET_PATH=/data/unified_ev_metadata.parquet cargo run -p evmeta-http-server
//!
//! # With logging
//! RUST_LOG=debug cargo run -p evmeta-http-server
//! ```
//!
//! # Environment Variables
//!
//! - `EV_CONFIG`: Optional TOML config file
//! - `EV_HTTP_HOST` / `EV_HTTP_PORT`: Bind address (default: `0.0.0.0:8000`)
//! - `EV_PARQUET_PATH`: Dataset path, skips the location search
//! - `EV_SEARCH_PATHS`: Colon-separated dataset candidates
//! - `RUST_LOG`: Logging level (default: `info,tower_http=debug`)

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use evmeta_http_server::{
    api::{build_router, AppState},
    config::Config,
};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = std::env::var("EV_CONFIG").ok();
    let config =
        Config::load(config_path.as_deref()).context("Failed to load configuration")?;
    let config = Arc::new(config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.bind_address(),
        "EV metadata server starting"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .thread_name("evmeta-http")
        .enable_all()
        .build()?;

    runtime.block_on(serve(config))?;

    tracing::info!("EV metadata server shutdown complete");
    Ok(())
}

async fn serve(config: Arc<Config>) -> Result<()> {
    match config.locator().resolve() {
        Ok(path) => tracing::info!(path = %path.display(), "Serving dataset"),
        Err(e) => tracing::warn!("{}; case study requests will fail until it appears", e),
    }

    let router = build_router(AppState::new(config.clone()));

    let bind_addr = config.bind_address();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    tracing::info!("HTTP server listening on {}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, initiating graceful shutdown...");
        })
        .await?;

    Ok(())
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
