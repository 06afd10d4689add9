//! Basic authentication middleware for the admin endpoints.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::{error::AppError, state::AppState};

/// Runs the [`crate::application::services::AccessGate`] before an admin handler.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(<user>:<password>)
/// ```
///
/// # Behavior
///
/// - Gate open (no credentials configured): the request passes and a warning
///   is logged
/// - Gate guarded: the header must carry the configured user and password;
///   otherwise the handler never runs and `401 Unauthorized` is returned with
///   `WWW-Authenticate: Basic realm="Admin Area"`
///
/// # Example
///
/// ```rust,ignore
/// let admin = api::routes::admin_routes()
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !st.access_gate.is_guarded() {
        st.access_gate.authorize(None)?;
        return Ok(next.run(req).await);
    }

    let (mut parts, body) = req.into_parts();

    let presented = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|AuthBasic((user, password))| (user, password.unwrap_or_default()));

    st.access_gate
        .authorize(presented.as_ref().map(|(u, p)| (u.as_str(), p.as_str())))?;

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
