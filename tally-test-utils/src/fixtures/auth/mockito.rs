//! Mock OAuth provider endpoint creation utilities.
//!
//! Simulates the chat platform's OAuth2 provider: the token exchange that the
//! authorization-code flow posts to, and the profile endpoint queried with the
//! resulting bearer token.

use mockito::Mock;
use serde_json::json;

use crate::fixtures::auth::AuthFixtures;

impl<'a> AuthFixtures<'a> {
    /// Create mock endpoints for a complete OAuth sign-in flow.
    ///
    /// 1. POST `/api/oauth2/token` - exchanges the authorization code
    /// 2. GET `/api/users/@me` - returns the signed-in user's profile
    ///
    /// The profile's `id` doubles as the platform chat user id, which is what
    /// lets a sign-in surface an existing chat-created account.
    ///
    /// # Returns
    /// - `Vec<Mock>` - both endpoints, for later call-count assertion
    pub fn create_oauth_endpoints(
        &mut self,
        provider_account_id: &str,
        username: &str,
        email: Option<&str>,
    ) -> Vec<Mock> {
        let mock_token_endpoint = self
            .setup
            .server
            .mock("POST", "/api/oauth2/token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "access_token": "mock_access_token",
                    "token_type": "Bearer",
                    "expires_in": 604_800,
                    "refresh_token": "mock_refresh_token",
                    "scope": "identify email"
                })
                .to_string(),
            )
            .create();

        let mock_profile_endpoint = self
            .setup
            .server
            .mock("GET", "/api/users/@me")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "id": provider_account_id,
                    "username": username,
                    "email": email,
                    "avatar": "a1b2c3d4"
                })
                .to_string(),
            )
            .create();

        vec![mock_token_endpoint, mock_profile_endpoint]
    }
}
