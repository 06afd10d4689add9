//! # golinks
//!
//! An internal go-links service: short human-chosen slugs redirect to
//! destination URLs, curated through a small authenticated admin API.
//! Built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The link entity and repository trait
//! - **Application Layer** ([`application`]) - Link service and access gate
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations, repository
//! - **API Layer** ([`api`]) - Redirect and admin handlers, DTOs, middleware
//! - **Web Layer** ([`web`]) - HTML listing page
//!
//! ## Endpoints
//!
//! - `GET /` - listing of all links
//! - `GET /{slug}` - `302` redirect, or `404`
//! - `POST /admin/add` - `{"slug", "url"}` → `201`
//! - `POST /admin/remove` - `{"slug"}` → `200`
//!
//! ## Quick Start
//!
//! ```bash
//! export ADMIN_USER=admin ADMIN_PASS=change-me   # optional, admin API is open without them
//! cargo run
//!
//! curl -u admin:change-me -d '{"slug":"wiki","url":"https://wiki.example.com"}' \
//!     http://localhost:8080/admin/add
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for the admin CLI
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AccessGate, AdminCredentials, LinkService};
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
