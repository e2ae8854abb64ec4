use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Expected user-facing timer conditions. Surfaced as rejected operations,
/// never retried automatically.
#[derive(Error, Debug)]
pub enum TimerError {
    #[error("An active timer already exists for account ID {0}")]
    AlreadyRunning(i32),
    #[error("No active timer exists for account ID {0}")]
    NoActiveTimer(i32),
    #[error("Project ID {0} does not exist for this account")]
    ProjectNotFound(i32),
}

impl IntoResponse for TimerError {
    fn into_response(self) -> Response {
        match self {
            Self::AlreadyRunning(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "You already have an active timer running".to_string(),
                }),
            )
                .into_response(),
            Self::NoActiveTimer(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "No active timer found".to_string(),
                }),
            )
                .into_response(),
            Self::ProjectNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Project not found".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
