use chrono::{Duration, Utc};
use rand::{distr::Alphanumeric, Rng};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::identity::session::SessionRepository,
    error::{auth::AuthError, Error},
    model::identity::OauthAssertion,
    oauth::OauthClient,
    service::{
        auth::{OAUTH_PROVIDER, SESSION_TOKEN_LENGTH, SESSION_TTL_DAYS},
        identity::IdentityService,
    },
};

/// Resolved account and issued session token for a completed sign-in.
pub struct CallbackData {
    pub account: entity::account::Model,
    pub session_token: String,
}

/// Completes the OAuth callback after CSRF validation.
///
/// Exchanges the authorization code, fetches the provider profile, resolves
/// it to an account, and issues a database session row. The provider's
/// profile id doubles as the platform chat user id, so the assertion carries
/// it on both axes and a sign-in can claim a bot-created account.
///
/// # Returns
/// - `Ok(CallbackData)` - The canonical account and its new session token
/// - `Err(Error::AuthError(AuthError::TokenExchangeFailed))` - Provider rejected the code
/// - `Err(Error::AuthError(AuthError::ProfileMissingId))` - Profile carried no usable id
/// - `Err(Error::IdentityError(IdentityError::Conflict))` - Resolution lost a uniqueness race
/// - `Err(Error)` - Profile fetch or database operation failed
pub async fn callback_service(
    db: &DatabaseConnection,
    oauth_client: &OauthClient,
    code: String,
) -> Result<CallbackData, Error> {
    let access_token = oauth_client.exchange_code(&code).await?;
    let profile = oauth_client.fetch_profile(&access_token).await?;

    // The id becomes both the login binding and the chat identity; an
    // empty one would poison resolution for every later sign-in.
    if profile.id.is_empty() {
        return Err(AuthError::ProfileMissingId.into());
    }

    let avatar_url = profile.avatar_url();
    let assertion = OauthAssertion {
        provider: OAUTH_PROVIDER.to_string(),
        provider_account_id: profile.id.clone(),
        email: profile.email,
        display_name: Some(profile.username.clone()),
        avatar_url,
        chat_user_id: Some(profile.id),
        chat_handle: Some(profile.username),
    };

    let account = IdentityService::new(db).resolve_oauth(assertion).await?;

    let session_repository = SessionRepository::new(db);
    let now = Utc::now().naive_utc();
    // Expired rows are swept here; there is no background job for them.
    session_repository.delete_expired(now).await?;

    let session_token: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_TOKEN_LENGTH)
        .map(char::from)
        .collect();
    session_repository
        .create(
            account.id,
            &session_token,
            now + Duration::days(SESSION_TTL_DAYS),
        )
        .await?;

    Ok(CallbackData {
        account,
        session_token,
    })
}
