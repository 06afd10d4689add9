//! Handler for go-link redirects.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its stored URL.
///
/// # Endpoint
///
/// `GET /{*slug}`
///
/// The slug is everything after the leading `/`, so multi-segment slugs such
/// as `team/oncall` resolve too.
///
/// # Responses
///
/// - `302 Found` with `Location` set to the stored URL
/// - `404 Not Found` with an empty body when the slug is unknown
///
/// Lookup failures of any other kind, including paths that do not decode to
/// UTF-8, are also answered with a bare 404.
pub async fn redirect_handler(
    State(state): State<AppState>,
    slug: Result<Path<String>, PathRejection>,
) -> Response {
    let slug = match slug {
        Ok(Path(slug)) => slug,
        Err(rejection) => {
            info!(error = %rejection, "Undecodable slug");
            return StatusCode::NOT_FOUND.into_response();
        }
    };

    match state.link_service.resolve(&slug).await {
        Ok(link) => match HeaderValue::try_from(link.url.as_str()) {
            Ok(location) => {
                info!(%slug, url = %link.url, "Redirecting");
                (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
            }
            Err(e) => {
                error!(%slug, url = %link.url, error = %e, "Stored URL is not a valid Location");
                StatusCode::NOT_FOUND.into_response()
            }
        },
        Err(AppError::NotFound { .. }) => {
            info!(%slug, "Slug not found");
            StatusCode::NOT_FOUND.into_response()
        }
        Err(e) => {
            error!(%slug, error = %e, "Failed to resolve slug");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
