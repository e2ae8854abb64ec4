//! HTTP controller endpoints for the tally web API.
//!
//! This module contains Axum handlers for authentication, timers, workload
//! records, statistics, and account data teardown. Controllers handle HTTP
//! requests, validate inputs, interact with services, and return appropriate
//! HTTP responses. They integrate with tower-sessions for session management
//! and use utoipa for OpenAPI documentation.

pub mod account;
pub mod auth;
pub mod stats;
pub mod timer;
pub mod util;
pub mod work;
