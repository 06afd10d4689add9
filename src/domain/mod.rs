//! Domain layer containing the link entity and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Business rules (validation, reserved slugs) live in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
