//! OAuth2 client for the chat platform's sign-in flow.
//!
//! Wraps the authorization-code dance (authorize URL + CSRF state, code
//! exchange) and the profile fetch performed with the resulting bearer
//! token. The provider's profile `id` doubles as the platform chat user id,
//! which is what lets a web sign-in surface an account first created through
//! the bot.

use oauth2::{
    basic::BasicClient, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken,
    EndpointNotSet, EndpointSet, RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use serde::Deserialize;

use crate::server::{
    config::Config,
    error::{auth::AuthError, config::ConfigError, Error},
};

type AuthCodeClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Configured OAuth2 client plus the HTTP client used against the provider.
///
/// The HTTP client never follows redirects; the token and profile endpoints
/// answer directly and a redirecting response would indicate a misconfigured
/// provider URL.
#[derive(Clone)]
pub struct OauthClient {
    client: AuthCodeClient,
    http: reqwest::Client,
    api_url: String,
}

/// Authorization URL and CSRF state for initiating a login.
pub struct AuthorizeData {
    pub login_url: String,
    pub state: String,
}

/// Base URL for provider-hosted avatar images.
const AVATAR_CDN_URL: &str = "https://cdn.discordapp.com/avatars";

/// Profile returned by the provider for the signed-in user.
#[derive(Clone, Debug, Deserialize)]
pub struct OauthProfile {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

impl OauthProfile {
    /// CDN URL for the user's avatar, when one is set.
    ///
    /// The profile endpoint returns a bare image hash; the displayable URL
    /// is assembled from the provider's CDN, the user id, and that hash.
    pub fn avatar_url(&self) -> Option<String> {
        self.avatar
            .as_ref()
            .map(|hash| format!("{}/{}/{}.png", AVATAR_CDN_URL, self.id, hash))
    }
}

impl OauthClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let client = BasicClient::new(ClientId::new(config.oauth_client_id.clone()))
            .set_client_secret(ClientSecret::new(config.oauth_client_secret.clone()))
            .set_auth_uri(parse_url(AuthUrl::new, &config.oauth_auth_url, "OAUTH_AUTH_URL")?)
            .set_token_uri(parse_url(
                TokenUrl::new,
                &config.oauth_token_url,
                "OAUTH_TOKEN_URL",
            )?)
            .set_redirect_uri(parse_url(
                RedirectUrl::new,
                &config.oauth_callback_url,
                "OAUTH_CALLBACK_URL",
            )?);

        let http = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            http,
            api_url: config.oauth_api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the provider authorization URL with a fresh CSRF state.
    pub fn authorize_url(&self) -> AuthorizeData {
        let (url, csrf_token) = self
            .client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .url();

        AuthorizeData {
            login_url: url.to_string(),
            state: csrf_token.secret().to_string(),
        }
    }

    /// Exchange an authorization code for an access token.
    pub async fn exchange_code(&self, code: &str) -> Result<String, Error> {
        let token = self
            .client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&self.http)
            .await
            .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

        Ok(token.access_token().secret().to_string())
    }

    /// Fetch the signed-in user's profile with a bearer token.
    pub async fn fetch_profile(&self, access_token: &str) -> Result<OauthProfile, Error> {
        let profile = self
            .http
            .get(format!("{}/api/users/@me", self.api_url))
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<OauthProfile>()
            .await?;

        Ok(profile)
    }
}

fn parse_url<T, F>(construct: F, value: &str, var: &str) -> Result<T, Error>
where
    F: FnOnce(String) -> Result<T, oauth2::url::ParseError>,
{
    construct(value.to_string()).map_err(|e| {
        Error::ConfigError(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })
    })
}
