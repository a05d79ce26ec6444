//! Exam seat planner server.
//!
//! Serves the room catalog and the seat allocation endpoint over HTTP.

use std::sync::Arc;

use anyhow::{Context, Result};
use seatplan_server::{
    api,
    catalog::{MemoryCatalog, PgCatalog, RoomCatalog},
    config::{self, StorageKind},
    state::AppState,
};
use tokio::sync::watch;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::Config::from_env()?;

    // Prefer RUST_LOG, fall back to SEATPLAN_LOG_LEVEL
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Starting seatplan server");
    info!(listen_addr = %config.listen_addr, storage = ?config.storage, "Configuration loaded");

    let catalog = open_catalog(&config).await?;
    let state = AppState::new(catalog);
    let app = api::create_router(state);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(addr = %config.listen_addr, "Listening for connections");

    let mut server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let mut shutdown_rx = shutdown_rx;
                while !*shutdown_rx.borrow() {
                    if shutdown_rx.changed().await.is_err() {
                        break;
                    }
                }
                info!("HTTP server shutting down");
            })
            .await
    });

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
            let _ = shutdown_tx.send(true);
            let shutdown_timeout = std::time::Duration::from_secs(10);
            if tokio::time::timeout(shutdown_timeout, &mut server_handle).await.is_err() {
                warn!("HTTP server did not shut down in time");
            }
        }
        result = &mut server_handle => {
            match result {
                Ok(Ok(())) => info!("Server exited normally"),
                Ok(Err(e)) => error!(error = %e, "Server error"),
                Err(e) => error!(error = %e, "Server task panicked"),
            }
        }
    }

    info!("Seatplan server shutdown complete");
    Ok(())
}

async fn open_catalog(config: &config::Config) -> Result<Arc<dyn RoomCatalog>> {
    match config.storage {
        StorageKind::Memory => {
            warn!("Using in-memory room catalog; classrooms are lost on restart");
            Ok(Arc::new(MemoryCatalog::new()))
        }
        StorageKind::Postgres => {
            let catalog = PgCatalog::connect(&config.postgres).await.map_err(|e| {
                error!(error = %e, "Failed to connect to room catalog database");
                e
            })?;

            if config.run_migrations {
                catalog
                    .migrate(&config.postgres.migrations_dir)
                    .await
                    .map_err(|e| {
                        error!(error = %e, "Failed to run migrations");
                        e
                    })?;
            }

            Ok(Arc::new(catalog))
        }
    }
}
