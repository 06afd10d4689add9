//! Helper functions shared by the service and the admin CLI.
//!
//! - [`validation`] - Slug and destination URL checks

pub mod validation;
