//! Business logic services for the application layer.

pub mod access_gate;
pub mod link_service;

pub use access_gate::{AccessGate, AdminCredentials};
pub use link_service::LinkService;
