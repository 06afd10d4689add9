//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link resolution, listing, add and remove
//! - [`services::access_gate::AccessGate`] - Admin credential check
pub mod services;
