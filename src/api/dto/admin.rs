//! DTOs for the link add/remove endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Body of `POST /admin/add`.
///
/// Missing fields decode as empty strings and are then rejected by slug/URL
/// validation in the service.
#[derive(Debug, Deserialize, Validate)]
pub struct AddLinkRequest {
    #[serde(default)]
    #[validate(length(max = 255))]
    pub slug: String,

    #[serde(default)]
    #[validate(length(max = 2048))]
    pub url: String,
}

/// Body of `POST /admin/remove`.
#[derive(Debug, Deserialize, Validate)]
pub struct RemoveLinkRequest {
    #[serde(default)]
    #[validate(length(max = 255))]
    pub slug: String,
}

/// Response for a created link.
#[derive(Debug, Serialize)]
pub struct AddLinkResponse {
    pub status: &'static str,
    pub slug: String,
    pub url: String,
}

impl From<Link> for AddLinkResponse {
    fn from(link: Link) -> Self {
        Self {
            status: "created",
            slug: link.slug,
            url: link.url,
        }
    }
}

/// Response for a removed link.
#[derive(Debug, Serialize)]
pub struct RemoveLinkResponse {
    pub status: &'static str,
    pub slug: String,
}

impl RemoveLinkResponse {
    pub fn removed(slug: String) -> Self {
        Self {
            status: "removed",
            slug,
        }
    }
}
