//! Handlers for link administration (add and remove).
//!
//! Both endpoints sit behind [`crate::api::middleware::auth`].

use axum::{Json, extract::State, http::StatusCode};
use tracing::info;

use crate::api::dto::admin::{
    AddLinkRequest, AddLinkResponse, RemoveLinkRequest, RemoveLinkResponse,
};
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new go-link.
///
/// # Endpoint
///
/// `POST /admin/add`
///
/// # Request Body
///
/// ```json
/// { "slug": "wiki", "url": "https://wiki.example.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "status": "created", "slug": "wiki", "url": "https://wiki.example.com" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request - malformed body, empty/reserved slug, or non-HTTP(S) URL
/// - 409 Conflict - slug already exists
pub async fn add_link_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AddLinkRequest>,
) -> Result<(StatusCode, Json<AddLinkResponse>), AppError> {
    let link = state.link_service.add(&payload.slug, &payload.url).await?;

    info!(slug = %link.slug, url = %link.url, "Link added");

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Removes an existing go-link.
///
/// # Endpoint
///
/// `POST /admin/remove`
///
/// # Request Body
///
/// ```json
/// { "slug": "wiki" }
/// ```
///
/// # Response
///
/// `200 OK` with `{ "status": "removed", "slug": "wiki" }`
///
/// # Errors
///
/// - 400 Bad Request - malformed body or empty/reserved slug
/// - 404 Not Found - slug unknown
pub async fn remove_link_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RemoveLinkRequest>,
) -> Result<Json<RemoveLinkResponse>, AppError> {
    let slug = state.link_service.remove(&payload.slug).await?;

    info!(%slug, "Link removed");

    Ok(Json(RemoveLinkResponse::removed(slug)))
}
