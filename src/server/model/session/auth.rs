//! Session storage for the OAuth CSRF state.
//!
//! The login endpoint generates a random `state` value and parks it in the
//! caller's session; the callback compares the stored value against the
//! `state` query parameter before exchanging the authorization code, so a
//! forged callback cannot complete a sign-in it never initiated.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, Error};

/// Session key the CSRF state is stored under, namespaced under
/// "tally:auth:" to keep it clear of other session data.
pub const SESSION_AUTH_CSRF_KEY: &str = "tally:auth:csrf";

/// Wrapper serializing the CSRF state string into the session store.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthCsrf(pub String);

impl SessionAuthCsrf {
    /// Stores the CSRF state at login initiation, replacing any value a
    /// previous login attempt left behind.
    ///
    /// # Arguments
    /// - `session` - User's session for storing the CSRF token
    /// - `state` - Randomly generated CSRF state string
    ///
    /// # Returns
    /// - `Ok(())` - CSRF token stored in session
    /// - `Err(Error)` - Session storage failed (store error, serialization error)
    pub async fn insert(session: &Session, state: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_CSRF_KEY, SessionAuthCsrf(state.to_string()))
            .await?;

        Ok(())
    }

    /// Reads the CSRF state without consuming it. Absence means the caller
    /// never initiated a login or the session has already expired.
    ///
    /// # Arguments
    /// - `session` - User's session to read the CSRF token from
    ///
    /// # Returns
    /// - `Ok(String)` - CSRF token found
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No CSRF token in session
    /// - `Err(Error)` - Session retrieval failed (store error)
    pub async fn get(session: &Session) -> Result<String, Error> {
        match session.get(SESSION_AUTH_CSRF_KEY).await? {
            Some(csrf) => Ok(csrf),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }

    /// Takes the CSRF state out of the session, so one stored value can
    /// validate at most one callback.
    ///
    /// # Arguments
    /// - `session` - User's session to remove the CSRF token from
    ///
    /// # Returns
    /// - `Ok(Some(String))` - CSRF token removed and returned
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No CSRF token in session
    /// - `Err(Error)` - Session operation failed (store error)
    pub async fn remove(session: &Session) -> Result<Option<String>, Error> {
        match session.remove(SESSION_AUTH_CSRF_KEY).await? {
            Some(csrf) => Ok(csrf),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }
}
