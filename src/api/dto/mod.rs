//! Data Transfer Objects for the admin API.
//!
//! Requests are deserialized with Serde and checked with `validator`.

pub mod admin;
