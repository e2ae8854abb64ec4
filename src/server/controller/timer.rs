use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        timer::{ActiveTimerDto, StartTimerDto, TimerDto},
    },
    server::{
        controller::util::get_account::get_account_from_session,
        error::Error,
        model::app::AppState,
        service::timer::TimerService,
    },
};

pub static TIMER_TAG: &str = "timer";

/// Start a work timer
///
/// Starts a timer for the signed-in account, optionally bound to one of the
/// account's projects. Only one timer can run per account at a time.
#[utoipa::path(
    post,
    path = "/api/timer/start",
    tag = TIMER_TAG,
    request_body = StartTimerDto,
    responses(
        (status = 200, description = "Success when starting a timer", body = TimerDto),
        (status = 400, description = "A timer is already running", body = ErrorDto),
        (status = 404, description = "Account or project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<StartTimerDto>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let account = get_account_from_session(&state, &session).await?;

    let timer = TimerService::new(&state.db)
        .start(account.id, body.project_id)
        .await?;

    Ok(Json(TimerDto::from(timer)))
}

/// Stop the running timer
///
/// Completes the account's active timer, records its whole-second duration,
/// and credits the time to the bound project's accumulator.
#[utoipa::path(
    post,
    path = "/api/timer/stop",
    tag = TIMER_TAG,
    responses(
        (status = 200, description = "Success when stopping the running timer", body = TimerDto),
        (status = 404, description = "Account not found or no active timer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn stop(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let account = get_account_from_session(&state, &session).await?;

    let timer = TimerService::new(&state.db).stop(account.id).await?;

    Ok(Json(TimerDto::from(timer)))
}

/// Get the running timer
///
/// Returns the account's active timer with its elapsed seconds recomputed at
/// read time, or null when no timer is running.
#[utoipa::path(
    get,
    path = "/api/timer/active",
    tag = TIMER_TAG,
    responses(
        (status = 200, description = "The running timer, or null when none", body = Option<ActiveTimerDto>),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn active(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let account = get_account_from_session(&state, &session).await?;

    let timer = TimerService::new(&state.db).active(account.id).await?;

    Ok(Json(timer))
}

/// Get completed timers
///
/// Returns the account's completed timers, newest first, capped at 50.
#[utoipa::path(
    get,
    path = "/api/timer/history",
    tag = TIMER_TAG,
    responses(
        (status = 200, description = "Success when retrieving timer history", body = Vec<TimerDto>),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn history(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let account = get_account_from_session(&state, &session).await?;

    let timers = TimerService::new(&state.db).history(account.id).await?;

    let timer_dtos: Vec<TimerDto> = timers.into_iter().map(TimerDto::from).collect();

    Ok(Json(timer_dtos))
}
