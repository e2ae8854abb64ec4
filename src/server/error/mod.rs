//! Error types for the tally server.
//!
//! Domain-specific error enums (authentication, configuration, identity
//! resolution, timers, workload records) aggregate into a single [`Error`] type via
//! `thiserror`. Every error implements `IntoResponse`; anything without a
//! specific mapping funnels through [`InternalServerError`], which logs the
//! cause and returns a generic 500 body so internals never leak to clients.

pub mod auth;
pub mod config;
pub mod identity;
pub mod timer;
pub mod work;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, identity::IdentityError, timer::TimerError,
        work::WorkError,
    },
};

/// Main error type for the tally server.
///
/// Aggregates the domain error enums and external library errors into one
/// unified type, with `#[from]` conversions so `?` works throughout the
/// service and controller layers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (session, CSRF, OAuth token exchange)
/// - Identity errors (uniqueness conflicts, merge preconditions)
/// - Timer errors (already running, none running)
/// - External library errors (database, sessions, HTTP client)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (session, CSRF, OAuth token exchange).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Identity resolution or merge error.
    #[error(transparent)]
    IdentityError(#[from] IdentityError),
    /// Timer state error (already running, none running).
    #[error(transparent)]
    TimerError(#[from] TimerError),
    /// Workload record error (unknown client).
    #[error(transparent)]
    WorkError(#[from] WorkError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in tally's code.
    #[error("Internal error with tally's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, aborted
    /// transactions). Store-level aborts are safe to retry from scratch;
    /// every operation re-checks its preconditions.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// HTTP client error (OAuth profile fetch).
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own mappings; everything else is a 500 with
/// logging via [`InternalServerError`].
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::IdentityError(err) => err.into_response(),
            Self::TimerError(err) => err.into_response(),
            Self::WorkError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging, but returns a generic message
/// to the client to avoid exposing internals.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
