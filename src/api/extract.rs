//! Request body extractor for the admin API.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

use crate::error::AppError;

/// JSON body that is decoded and validated before reaching the handler.
///
/// Unlike [`axum::Json`], the `Content-Type` header is not checked: the raw body
/// is always decoded as JSON. Every failure maps to [`AppError::Validation`]
/// (400 Bad Request).
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            AppError::bad_request(
                "Failed to read request body",
                json!({ "reason": e.body_text() }),
            )
        })?;

        let value: T = serde_json::from_slice(&body).map_err(|e| {
            AppError::bad_request("Invalid JSON", json!({ "reason": e.to_string() }))
        })?;

        value.validate()?;

        Ok(Self(value))
    }
}
