use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{account::AccountDto, api::ErrorDto, auth::LoginUrlDto},
    server::{
        controller::util::{csrf::validate_csrf, get_account::get_account_from_session},
        data::identity::session::SessionRepository,
        error::Error,
        model::{
            app::AppState,
            session::{account::SessionAccountId, auth::SessionAuthCsrf, token::SessionToken},
        },
        service::auth::{callback::callback_service, login::login_service},
    },
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: String,
    pub code: String,
}

/// Begin the OAuth sign-in flow
///
/// Generates the provider authorization URL, stores its CSRF state in the
/// session, and returns the URL for the dashboard to navigate to.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authorization URL to continue sign-in at the provider", body = LoginUrlDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let authorize = login_service(&state.oauth);

    SessionAuthCsrf::insert(&session, &authorize.state).await?;

    Ok(Json(LoginUrlDto {
        login_url: authorize.login_url,
    }))
}

/// Callback route the provider redirects to after sign-in
///
/// Validates the CSRF state, exchanges the authorization code, resolves the
/// verified identity to an account (creating or merging as needed), records a
/// session row, and redirects to the dashboard.
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state issued at login"),
        ("code" = String, Query, description = "Authorization code from the provider")
    ),
    responses(
        (status = 307, description = "Signed in, redirect to the dashboard"),
        (status = 400, description = "CSRF state mismatch with the state stored in session", body = ErrorDto),
        (status = 409, description = "Identity resolution would violate a uniqueness invariant", body = ErrorDto),
        (status = 500, description = "Token exchange, profile fetch, or database failure", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    validate_csrf(&session, &params.0.state).await?;

    let callback = callback_service(&state.db, &state.oauth, params.0.code).await?;

    SessionAccountId::insert(&session, callback.account.id).await?;
    SessionToken::insert(&session, &callback.session_token).await?;

    Ok(Redirect::temporary("/dashboard"))
}

/// Sign the account out
///
/// Deletes the database session row recorded at sign-in and clears the
/// cookie session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Signed out, redirect to the home page"),
        (status = 500, description = "There was an issue clearing the session", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    if let Some(token) = SessionToken::remove(&session).await? {
        SessionRepository::new(&state.db)
            .delete_by_token(&token)
            .await?;
    }

    // Only clear session if there is actually an account in session
    //
    // This avoids a 500 internal error response that occurs when trying
    // to clear sessions which don't exist
    if SessionAccountId::get(&session).await?.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/"))
}

/// Get the signed-in account
#[utoipa::path(
    get,
    path = "/api/auth/account",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Success when retrieving the signed-in account", body = AccountDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_account(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let account = get_account_from_session(&state, &session).await?;

    Ok(Json(AccountDto::from(account)))
}
