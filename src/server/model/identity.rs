//! Identity assertions produced by the sign-in surfaces.
//!
//! Both entry points into the identity layer reduce to one of these two
//! structs before any database work happens. The chat bot asserts a platform
//! user id it saw directly; the OAuth callback asserts a verified provider
//! login, which for the chat platform's own provider also carries the same
//! platform user id. The resolution services consume assertions and never
//! see tokens, HTTP requests, or sessions.

/// A chat-surface claim that a platform user issued a command.
///
/// The bot process authenticates the platform, not the user, so the id is
/// taken at face value. Accounts created from chat assertions are provisional
/// until an OAuth login links them to a verified provider identity.
#[derive(Clone, Debug)]
pub struct ChatAssertion {
    /// Platform-assigned stable user id.
    pub chat_user_id: String,
    /// Display handle at the time of the command, if the surface had one.
    pub chat_handle: Option<String>,
}

/// An OAuth-callback claim that a provider verified this login.
#[derive(Clone, Debug)]
pub struct OauthAssertion {
    /// Provider slug, e.g. `discord`.
    pub provider: String,
    /// Provider-assigned stable account id.
    pub provider_account_id: String,
    /// Verified email, when the provider shares one.
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    /// Platform chat user id, present when the provider is the chat platform
    /// itself. Drives reconciliation with bot-created accounts.
    pub chat_user_id: Option<String>,
    pub chat_handle: Option<String>,
}
