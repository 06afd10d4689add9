//! Top-level router combining the listing, redirect and admin routes.
//!
//! # Route Structure
//!
//! - `GET  /`              - HTML listing of all links (public)
//! - `GET  /{*slug}`       - Redirect to the stored URL (public)
//! - `POST /admin/add`     - Create a link (access gate)
//! - `POST /admin/remove`  - Delete a link (access gate)
//!
//! Static admin paths take priority over the slug catch-all, so `GET /admin/add`
//! answers `405 Method Not Allowed` rather than being treated as a slug.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - HTTP Basic via the access gate (admin only)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use crate::web;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware, without path normalization.
pub fn router(state: AppState) -> Router {
    let admin_router = api::routes::admin_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth::layer,
    ));

    Router::new()
        .merge(web::routes::public_routes())
        .route("/{*slug}", get(redirect_handler))
        .nest("/admin", admin_router)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] wrapped so that `/wiki/`
/// and `/wiki` reach the same handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
