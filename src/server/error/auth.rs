use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Account ID is not present in session")]
    AccountNotInSession,
    #[error("Account ID {0:?} not found in database despite having an active session")]
    AccountNotInDatabase(i32),
    #[error("Login rejected due to CSRF state mismatch")]
    CsrfValidationFailed,
    #[error("Login rejected because no CSRF state was stored in the session")]
    CsrfMissingValue,
    #[error("Failed to exchange authorization code for an access token: {0}")]
    TokenExchangeFailed(String),
    #[error("OAuth provider returned profile without a usable id")]
    ProfileMissingId,
}

impl AuthError {
    fn account_not_found() -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "Account not found".to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::AccountNotInSession => {
                tracing::debug!("{}", Self::AccountNotInSession);

                Self::account_not_found()
            }
            Self::AccountNotInDatabase(account_id) => {
                tracing::debug!(
                    account_id = %account_id,
                    "{}",
                    self
                );

                Self::account_not_found()
            }
            Self::CsrfValidationFailed => {
                tracing::debug!("{}", Self::CsrfValidationFailed);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "There was an issue logging you in, please try again.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CsrfMissingValue | Self::TokenExchangeFailed(_) | Self::ProfileMissingId => {
                InternalServerError(self).into_response()
            }
        }
    }
}
