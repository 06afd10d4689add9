//! SQLite connection pool setup and schema migrations.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::migrate::MigrateError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::path::Path;
use std::time::Duration;

/// Opens (creating if needed) the SQLite database at `path`.
///
/// The parent directory is created when missing. Connections use WAL journaling
/// so redirects can read while an admin write is in flight.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the database cannot
/// be opened.
pub async fn connect(path: &str, max_connections: u32, busy_timeout: Duration) -> Result<SqlitePool> {
    if let Some(parent) = Path::new(path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create database directory {}", parent.display())
        })?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(busy_timeout);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to open database {path}"))?;

    Ok(pool)
}

/// Applies the embedded migrations from `migrations/`.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
