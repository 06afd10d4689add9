//! Public HTML listing of all go-links.
//!
//! Uses Askama templates for server-side rendering.
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Public page routes

pub mod handlers;
pub mod routes;
