//! Go-links listing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::domain::entities::Link;
use crate::state::AppState;

/// Template for the listing page.
///
/// Renders `templates/index.html` with the link count and one entry per link,
/// or an empty-state hint when there are none.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub links: Vec<Link>,
    pub count: usize,
}

impl IndexTemplate {
    pub fn new(links: Vec<Link>) -> Self {
        Self {
            count: links.len(),
            links,
        }
    }
}

/// Renders every go-link, newest first.
///
/// # Endpoint
///
/// `GET /`
///
/// # Errors
///
/// Answers `500 Internal Server Error` with a plain message if the store
/// cannot be read.
pub async fn index_handler(State(state): State<AppState>) -> Response {
    match state.link_service.list().await {
        Ok(links) => IndexTemplate::new(links).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list links");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}
