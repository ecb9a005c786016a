//! Zero-Stress bundle site entry point.
//!
//! Resolves the listing source, validates it once, then starts the Axum HTTP
//! server with graceful shutdown.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use zerostress_core::inventory::Inventory;
use zerostress_core::listing::{Catalog, embedded_source};
use zerostress_storage::{FileSource, ListingSource};

use zerostress_server::config::{ListingSourceType, ServerConfig};
use zerostress_server::routes;
use zerostress_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment.
    let config = ServerConfig::from_env();

    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    info!(listings = ?config.listings, "Zero-Stress site starting");

    let state = build_app_state(&config).await?;
    let app = routes::build_router(state, &config.assets_dir, config.max_concurrency);

    // Bind and serve.
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "Zero-Stress site listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Zero-Stress site stopped");
    Ok(())
}

/// Resolve the listing source and check that it loads before accepting traffic.
async fn build_app_state(config: &ServerConfig) -> anyhow::Result<Arc<AppState>> {
    let listings: Arc<dyn ListingSource> = match &config.listings {
        ListingSourceType::Embedded => {
            info!("using embedded listing data");
            Arc::new(embedded_source())
        }
        ListingSourceType::File { path } => {
            info!(path = %path.display(), "using listing file (re-read on every render)");
            Arc::new(FileSource::new(path))
        }
    };

    let catalog = Catalog::load(listings.as_ref())
        .await
        .with_context(|| format!("failed to load listings from {}", listings.describe()))?;
    let scarcity = Inventory::from_catalog(&catalog).scarcity();
    info!(
        listings = catalog.len(),
        available = scarcity.remaining,
        capacity = scarcity.capacity,
        "listing catalog validated"
    );
    if scarcity.is_over_capacity() {
        warn!(
            remaining = scarcity.remaining,
            capacity = scarcity.capacity,
            "more listings available than bundles"
        );
    }

    if !config.assets_dir.is_dir() {
        warn!(path = %config.assets_dir.display(), "assets directory not found; hero image will 404");
    }

    Ok(Arc::new(AppState::new(listings, config.contact.clone())))
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}
