//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, access gate and Axum server lifecycle.

use crate::application::services::AccessGate;
use crate::config::Config;
use crate::infrastructure::database;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (creating the database file if needed)
/// - Schema migrations
/// - Access gate (open or guarded)
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The database cannot be opened or migrated
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = database::connect(
        &config.database_path,
        config.db_max_connections,
        config.busy_timeout(),
    )
    .await?;
    tracing::info!(path = %config.database_path, "Database opened");

    database::run_migrations(&pool)
        .await
        .context("Failed to apply database migrations")?;
    tracing::info!("Database initialized successfully");

    let access_gate = AccessGate::new(config.admin_credentials.clone());
    if access_gate.is_guarded() {
        tracing::info!("Admin authentication enabled");
    } else {
        tracing::warn!("Admin authentication disabled; /admin endpoints are open");
    }

    let state = AppState::new(Arc::new(pool.clone()), access_gate);

    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves when the process receives Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
