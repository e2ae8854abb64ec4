use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{account::ClearedDataDto, api::ErrorDto},
    server::{
        controller::util::get_account::get_account_from_session,
        error::Error,
        model::app::AppState,
        service::lifecycle::LifecycleService,
    },
};

pub static ACCOUNT_TAG: &str = "account";

#[derive(Deserialize, utoipa::IntoParams)]
pub struct ClearDataParams {
    /// Also delete the account row and its identity records
    #[serde(default)]
    pub delete_account: bool,
}

/// Clear the account's data
///
/// Deletes every workload record the account owns and reports per-table
/// counts. With `delete_account=true` the identity records and the account
/// row itself go too, and the session is cleared; the next sign-in starts
/// from a fresh account.
#[utoipa::path(
    delete,
    path = "/api/account/data",
    tag = ACCOUNT_TAG,
    params(ClearDataParams),
    responses(
        (status = 200, description = "Per-table counts of removed rows", body = ClearedDataDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn clear_data(
    State(state): State<AppState>,
    session: Session,
    params: Query<ClearDataParams>,
) -> Result<impl IntoResponse, Error> {
    let account = get_account_from_session(&state, &session).await?;

    let cleared = LifecycleService::new(&state.db)
        .clear_account_data(account.id, params.0.delete_account)
        .await?;

    if cleared.account_deleted {
        session.clear().await;
    }

    Ok(Json(cleared))
}
