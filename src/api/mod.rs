//! Admin API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies for the admin endpoints
//! - [`extract`] - JSON body extractor with validation
//! - [`handlers`] - HTTP request handlers (redirect and admin mutations)
//! - [`middleware`] - Access gate and tracing middleware
//! - [`routes`] - Admin route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
