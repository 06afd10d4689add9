//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Empty variables are treated as unset.
//!
//! ## Variables
//!
//! - `DB_PATH` - SQLite database file (default: `./data/links.db`)
//! - `LISTEN_ADDR` - Bind address (default: `0.0.0.0:8080`)
//! - `ADMIN_USER` / `ADMIN_PASS` - Basic auth credentials for `/admin/*`;
//!   if either is missing, admin endpoints are open
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - SQLite pool size (default: 5)
//! - `DB_BUSY_TIMEOUT` - SQLite busy timeout in seconds (default: 5)

use anyhow::Result;
use std::env;
use std::time::Duration;

use crate::application::services::AdminCredentials;

/// Default location of the SQLite database file.
pub const DEFAULT_DB_PATH: &str = "./data/links.db";

/// Default bind address.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub listen_addr: String,
    /// `None` disables admin authentication entirely.
    pub admin_credentials: Option<AdminCredentials>,
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of pooled SQLite connections (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Seconds a connection waits on a locked database (`DB_BUSY_TIMEOUT`, default: 5).
    pub db_busy_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let database_path = var("DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string());
        let listen_addr = var("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());

        let admin_credentials = AdminCredentials::from_parts(var("ADMIN_USER"), var("ADMIN_PASS"));

        let log_level = var("RUST_LOG").unwrap_or_else(|| "info".to_string());
        let log_format = var("LOG_FORMAT").unwrap_or_else(|| "text".to_string());

        let db_max_connections = var("DB_MAX_CONNECTIONS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_busy_timeout = var("DB_BUSY_TIMEOUT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            database_path,
            listen_addr,
            admin_credentials,
            log_level,
            log_format,
            db_max_connections,
            db_busy_timeout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `database_path` is empty
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        match self.listen_addr.rsplit_once(':') {
            Some((_, port)) if port.parse::<u16>().is_ok() => {}
            _ => anyhow::bail!(
                "LISTEN_ADDR must be in format 'host:port', got '{}'",
                self.listen_addr
            ),
        }

        if self.database_path.trim().is_empty() {
            anyhow::bail!("DB_PATH must not be empty");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_busy_timeout == 0 {
            anyhow::bail!("DB_BUSY_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Returns whether admin endpoints require credentials.
    pub fn is_auth_enabled(&self) -> bool {
        self.admin_credentials.is_some()
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.db_busy_timeout)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_path);

        match &self.admin_credentials {
            Some(credentials) => tracing::info!(
                "  Admin authentication: enabled (user '{}')",
                credentials.username()
            ),
            None => tracing::warn!("  Admin authentication: DISABLED (ADMIN_USER/ADMIN_PASS not set)"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Reads an environment variable, treating empty values as unset.
fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
