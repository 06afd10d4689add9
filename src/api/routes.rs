//! Admin API route configuration.
//!
//! All routes are protected by [`crate::api::middleware::auth`] when nested by
//! [`crate::routes::router`].

use crate::api::handlers::{add_link_handler, remove_link_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Admin routes, mounted under `/admin`.
///
/// # Endpoints
///
/// - `POST /add`    - Create a go-link
/// - `POST /remove` - Delete a go-link
///
/// Any other method on these paths yields `405 Method Not Allowed`.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_link_handler))
        .route("/remove", post(remove_link_handler))
}
