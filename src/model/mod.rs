//! Data transfer objects shared across the HTTP API.

pub mod account;
pub mod api;
pub mod auth;
pub mod stats;
pub mod timer;
pub mod work;
