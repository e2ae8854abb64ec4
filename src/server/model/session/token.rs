use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_TOKEN_KEY: &str = "tally:session:token";

/// Token of the database session row issued at login.
///
/// Stored alongside the account id so logout can delete the matching
/// database row. Absence is normal for a signed-out session.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionToken(pub String);

impl SessionToken {
    /// Insert session token into session
    pub async fn insert(session: &Session, token: &str) -> Result<(), Error> {
        session
            .insert(SESSION_TOKEN_KEY, SessionToken(token.to_string()))
            .await?;

        Ok(())
    }

    /// Remove and return the session token, if one was stored
    pub async fn remove(session: &Session) -> Result<Option<String>, Error> {
        let token = session
            .remove::<SessionToken>(SESSION_TOKEN_KEY)
            .await?
            .map(|SessionToken(token)| token);

        Ok(token)
    }
}
