use tower_sessions::Session;

use crate::server::{
    data::identity::AccountRepository,
    error::{auth::AuthError, Error},
    model::{app::AppState, session::account::SessionAccountId},
};

/// Retrieves the signed-in account from session and then from database
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(Model)`: Account found for the session
/// - `Err(Error::AuthError(AuthError::AccountNotInSession))`: No account ID in session
/// - `Err(Error::AuthError(AuthError::AccountNotInDatabase))`: Account ID in session but
///   no matching row, e.g. deleted by a merge or a data teardown (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors)
pub async fn get_account_from_session(
    state: &AppState,
    session: &Session,
) -> Result<entity::account::Model, Error> {
    let Some(account_id) = SessionAccountId::get(session).await? else {
        return Err(Error::AuthError(AuthError::AccountNotInSession));
    };

    let Some(account) = AccountRepository::new(&state.db).get(account_id).await? else {
        // The row can vanish underneath a live session, e.g. when a merge
        // dropped this account or a teardown deleted it.
        session.clear().await;

        tracing::warn!(
            account_id = account_id,
            "session referenced an account that no longer exists; session cleared"
        );

        return Err(Error::AuthError(AuthError::AccountNotInDatabase(account_id)));
    };

    Ok(account)
}
