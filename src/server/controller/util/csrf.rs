use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::auth::SessionAuthCsrf,
};

/// Compares the stored login state against the callback's `state` query
/// parameter. The stored value is consumed either way, so one login
/// initiation validates at most one callback.
pub async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), Error> {
    let stored_state = SessionAuthCsrf::remove(session).await?;

    match stored_state.as_deref() {
        Some(state) if state == csrf_state => Ok(()),
        _ => Err(Error::AuthError(AuthError::CsrfValidationFailed)),
    }
}
