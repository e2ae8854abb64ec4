use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, stats::StatsDto},
    server::{
        controller::util::get_account::get_account_from_session,
        error::Error,
        model::app::AppState,
        service::stats::StatsService,
    },
};

pub static STATS_TAG: &str = "stats";

/// Get the account's workload summary
///
/// Counts by status across projects, side projects, clients, and invoices,
/// revenue totals for paid and pending invoices, and accumulated worked
/// seconds, computed from the live tables on every request.
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Success when retrieving account statistics", body = StatsDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let account = get_account_from_session(&state, &session).await?;

    let stats = StatsService::new(&state.db).account_stats(account.id).await?;

    Ok(Json(stats))
}
