use crate::server::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub oauth_callback_url: String,
    pub oauth_auth_url: String,
    pub oauth_token_url: String,
    pub oauth_api_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_var("DATABASE_URL")?,
            oauth_client_id: require_var("OAUTH_CLIENT_ID")?,
            oauth_client_secret: require_var("OAUTH_CLIENT_SECRET")?,
            oauth_callback_url: require_var("OAUTH_CALLBACK_URL")?,
            oauth_auth_url: require_var("OAUTH_AUTH_URL")?,
            oauth_token_url: require_var("OAUTH_TOKEN_URL")?,
            oauth_api_url: require_var("OAUTH_API_URL")?,
            port: match std::env::var("PORT") {
                Ok(port) => port.parse().map_err(|_| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: format!("expected a port number, got {:?}", port),
                })?,
                Err(_) => 8080,
            },
        })
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
