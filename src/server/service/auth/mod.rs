//! Authentication service layer.
//!
//! Services for the OAuth2 sign-in flow: building the provider authorization
//! URL during login and, on callback, exchanging the code, resolving the
//! verified identity to an account, and issuing a database-backed session.

pub mod callback;
pub mod login;


/// Provider slug recorded on external logins created by the web flow.
pub const OAUTH_PROVIDER: &str = "discord";

/// Lifetime of an issued session row.
pub const SESSION_TTL_DAYS: i64 = 7;

/// Length of the opaque session token issued at login.
pub const SESSION_TOKEN_LENGTH: usize = 48;
