use crate::server::oauth::{AuthorizeData, OauthClient};

/// Builds the provider authorization URL with a fresh CSRF state.
///
/// The state must be stored in the caller's session and checked against the
/// `state` query parameter when the provider redirects back.
pub fn login_service(oauth_client: &OauthClient) -> AuthorizeData {
    oauth_client.authorize_url()
}
