//! Credential check guarding the admin endpoints.

use serde_json::json;
use std::fmt;
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::error::AppError;

/// Username and password required by the admin API.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Builds credentials only when both values are present and non-empty.
    pub fn from_parts(username: Option<String>, password: Option<String>) -> Option<Self> {
        match (username, password) {
            (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => Some(Self::new(u, p)),
            _ => None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Compares both fields in constant time; both comparisons always run.
    fn matches(&self, username: &str, password: &str) -> bool {
        let user_ok = self.username.as_bytes().ct_eq(username.as_bytes());
        let pass_ok = self.password.as_bytes().ct_eq(password.as_bytes());
        (user_ok & pass_ok).into()
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Decides whether a request may reach an admin operation.
///
/// The configuration is chosen once at startup:
///
/// - [`AccessGate::Open`] - no credentials configured, every request passes
///   (and a warning is logged for each one)
/// - [`AccessGate::Guarded`] - the request must present matching Basic credentials
#[derive(Debug, Clone)]
pub enum AccessGate {
    Open,
    Guarded(AdminCredentials),
}

impl AccessGate {
    /// Creates a gate from optional configured credentials.
    pub fn new(credentials: Option<AdminCredentials>) -> Self {
        match credentials {
            Some(credentials) => Self::Guarded(credentials),
            None => Self::Open,
        }
    }

    pub fn is_guarded(&self) -> bool {
        matches!(self, Self::Guarded(_))
    }

    /// Checks the credentials presented by a request.
    ///
    /// `presented` is `None` when the request carried no usable `Authorization`
    /// header.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when the gate is guarded and the
    /// credentials are missing or wrong.
    pub fn authorize(&self, presented: Option<(&str, &str)>) -> Result<(), AppError> {
        match self {
            Self::Open => {
                warn!("Admin endpoint accessed without authentication configured");
                Ok(())
            }
            Self::Guarded(expected) => match presented {
                Some((username, password)) if expected.matches(username, password) => Ok(()),
                Some((username, _)) => {
                    warn!(username, "Unauthorized admin access attempt");
                    Err(unauthorized("Invalid credentials"))
                }
                None => {
                    warn!("Unauthorized admin access attempt without credentials");
                    Err(unauthorized("Authorization header is missing or invalid"))
                }
            },
        }
    }
}

fn unauthorized(reason: &str) -> AppError {
    AppError::unauthorized("Unauthorized", json!({ "reason": reason }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guarded() -> AccessGate {
        AccessGate::new(Some(AdminCredentials::new("admin", "secret")))
    }

    #[test]
    fn test_open_gate_allows_anonymous() {
        let gate = AccessGate::new(None);

        assert!(!gate.is_guarded());
        assert!(gate.authorize(None).is_ok());
        assert!(gate.authorize(Some(("anyone", "anything"))).is_ok());
    }

    #[test]
    fn test_guarded_gate_accepts_matching_credentials() {
        assert!(guarded().authorize(Some(("admin", "secret"))).is_ok());
    }

    #[test]
    fn test_guarded_gate_rejects_wrong_password() {
        let result = guarded().authorize(Some(("admin", "wrong")));
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[test]
    fn test_guarded_gate_rejects_wrong_username() {
        let result = guarded().authorize(Some(("root", "secret")));
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[test]
    fn test_guarded_gate_rejects_missing_credentials() {
        let result = guarded().authorize(None);
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[test]
    fn test_guarded_gate_rejects_prefix_password() {
        let result = guarded().authorize(Some(("admin", "secre")));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_parts_requires_both_values() {
        assert!(AdminCredentials::from_parts(Some("a".into()), Some("b".into())).is_some());
        assert!(AdminCredentials::from_parts(Some("a".into()), None).is_none());
        assert!(AdminCredentials::from_parts(None, Some("b".into())).is_none());
        assert!(AdminCredentials::from_parts(Some("a".into()), Some(String::new())).is_none());
    }

    #[test]
    fn test_debug_hides_password() {
        let rendered = format!("{:?}", AdminCredentials::new("admin", "hunter2"));

        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));
    }
}
