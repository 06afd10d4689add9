//! HTTP request handlers for the public redirect and the admin API.

pub mod admin;
pub mod redirect;

pub use admin::{add_link_handler, remove_link_handler};
pub use redirect::redirect_handler;
