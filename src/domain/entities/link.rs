//! Link entity representing a go-link.

use chrono::{DateTime, Utc};

/// A stored mapping from a slug to its destination URL.
///
/// Links are never updated in place: changing the destination means removing
/// the slug and adding it again, which also resets `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub slug: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(slug: String, url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            slug,
            url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
///
/// Both fields are expected to be trimmed and validated already.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub slug: String,
    pub url: String,
}
