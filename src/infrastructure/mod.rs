//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`database`] - SQLite pool setup and embedded migrations
//! - [`persistence`] - SQLite repository implementations

pub mod database;
pub mod persistence;
