//! HTTP middleware for the go-links service.
//!
//! - [`auth`] - Access gate in front of the admin endpoints
//! - [`tracing`] - Request/response logging

pub mod auth;
pub mod tracing;
