//! Slug and destination URL validation.
//!
//! Both checks expect already-trimmed input; trimming is the caller's job so the
//! trimmed value is what gets stored.

use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Slug reserved for the admin API prefix.
pub const RESERVED_SLUG: &str = "admin";

/// Validates a slug for add or remove.
///
/// # Rules
///
/// - Must not be empty
/// - Must not equal [`RESERVED_SLUG`]
/// - Must not start or end with `/`, since request paths are trimmed of
///   surrounding slashes before routing and such a slug could never resolve
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_slug(slug: &str) -> Result<(), AppError> {
    if slug.is_empty()
        || slug == RESERVED_SLUG
        || slug.starts_with('/')
        || slug.ends_with('/')
    {
        return Err(AppError::bad_request(
            "Invalid slug",
            json!({ "slug": slug }),
        ));
    }

    Ok(())
}

/// Validates a destination URL.
///
/// The URL must start with `http://` or `https://`, contain no ASCII control
/// characters and parse into a non-empty scheme and host. It is stored exactly
/// as given; no normalization happens.
///
/// Control characters are checked before parsing because [`Url::parse`]
/// silently drops tabs and newlines, while the stored value must remain a valid
/// `Location` header.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the URL fails either check.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_target_url("https://wiki.example.com").is_ok());
/// assert!(validate_target_url("ftp://x.com").is_err());
/// assert!(validate_target_url("not a url").is_err());
/// ```
pub fn validate_target_url(url: &str) -> Result<(), AppError> {
    let invalid = || {
        AppError::bad_request(
            "Invalid URL - must start with http:// or https://",
            json!({ "url": url }),
        )
    };

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(invalid());
    }

    if url.chars().any(|c| c.is_ascii_control()) {
        return Err(invalid());
    }

    let parsed = Url::parse(url).map_err(|_| invalid())?;

    let has_host = parsed.host_str().is_some_and(|h| !h.is_empty());
    if parsed.scheme().is_empty() || !has_host {
        return Err(invalid());
    }

    Ok(())
}
