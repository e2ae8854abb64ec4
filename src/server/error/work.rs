use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejected workload record operations.
#[derive(Error, Debug)]
pub enum WorkError {
    #[error("Client ID {0} does not exist for this account")]
    ClientNotFound(i32),
}

impl IntoResponse for WorkError {
    fn into_response(self) -> Response {
        match self {
            Self::ClientNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Client not found".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
