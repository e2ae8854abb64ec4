use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// Errors raised while resolving external identities or merging accounts.
#[derive(Error, Debug)]
pub enum IdentityError {
    /// Creating or updating an account would violate a uniqueness invariant
    /// (email and chat id owned by different rows). Correct sequencing never
    /// produces this; it is surfaced as-is rather than auto-resolved because
    /// it indicates a logic or data-integrity bug.
    #[error("Identity resolution would violate a uniqueness invariant: {0}")]
    Conflict(String),
    #[error("Account ID {0} not found")]
    AccountNotFound(i32),
    #[error("Cannot merge account ID {0} into itself")]
    MergeSameAccount(i32),
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        match self {
            Self::Conflict(_) => {
                tracing::error!("{}", self);

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "Account identity conflict, please contact support.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccountNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Account not found".to_string(),
                }),
            )
                .into_response(),
            Self::MergeSameAccount(_) => InternalServerError(self).into_response(),
        }
    }
}
