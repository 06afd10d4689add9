//! Link resolution and administration service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::validation::{validate_slug, validate_target_url};
use serde_json::json;

/// Service for resolving, listing, adding and removing go-links.
///
/// Validation always runs before the repository is touched. Store failures are
/// returned as-is and never retried.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Looks up the link stored under `slug`.
    ///
    /// The slug is used verbatim; no trimming or validation happens on lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the slug.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, slug: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Slug not found", json!({ "slug": slug })))
    }

    /// Returns all links, newest first. An empty store yields an empty vector.
    pub async fn list(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_all().await
    }

    /// Counts stored links.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Adds a new link after trimming and validating both fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the slug is empty or reserved, or the
    /// URL is not an absolute `http`/`https` URL.
    ///
    /// Returns [`AppError::Conflict`] if the slug already exists.
    pub async fn add(&self, slug: &str, url: &str) -> Result<Link, AppError> {
        let slug = slug.trim();
        let url = url.trim();

        validate_slug(slug)?;
        validate_target_url(url)?;

        let new_link = NewLink {
            slug: slug.to_string(),
            url: url.to_string(),
        };

        self.link_repository
            .create(new_link)
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => {
                    AppError::conflict("Slug already exists", json!({ "slug": slug }))
                }
                other => other,
            })
    }

    /// Removes the link stored under `slug` and returns the trimmed slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the slug is empty or reserved.
    /// Returns [`AppError::NotFound`] if nothing was stored under the slug.
    pub async fn remove(&self, slug: &str) -> Result<String, AppError> {
        let slug = slug.trim();

        validate_slug(slug)?;

        if !self.link_repository.delete(slug).await? {
            return Err(AppError::not_found(
                "Slug not found",
                json!({ "slug": slug }),
            ));
        }

        Ok(slug.to_string())
    }
}
