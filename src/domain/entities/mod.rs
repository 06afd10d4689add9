//! Core domain entities.
//!
//! - [`Link`] - A stored slug to URL mapping
//! - [`NewLink`] - Input for creating a link; `created_at` is assigned by the store

pub mod link;

pub use link::{Link, NewLink};
