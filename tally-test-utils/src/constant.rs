//! Shared constant values for test OAuth client configuration.
//!
//! None of these are real credentials; they are placeholder values wired into
//! the mock OAuth provider started by [`TestSetup`](crate::TestSetup).

/// Mock OAuth2 client ID for testing.
pub static TEST_OAUTH_CLIENT_ID: &str = "oauth_client_id";

/// Mock OAuth2 client secret for testing.
pub static TEST_OAUTH_CLIENT_SECRET: &str = "oauth_client_secret";

/// Callback URL registered with the mock OAuth provider.
pub static TEST_CALLBACK_URL: &str = "http://localhost:8080/api/auth/callback";

/// OAuth provider name used across tests.
pub static TEST_PROVIDER: &str = "discord";

/// Partial unique index over active timers, mirroring the timer migration.
///
/// `Schema::create_table_from_entity` cannot emit partial indexes, so the
/// account-tables macro applies this statement after table creation to keep
/// the test schema faithful to the migrated one.
pub static TIMER_ACTIVE_INDEX_SQL: &str =
    "CREATE UNIQUE INDEX \"idx-timer-account_id-active\" ON \"timer\" (\"account_id\") WHERE \"is_active\"";

/// Unique index over (provider, provider_account_id), mirroring the external
/// login migration. Composite indexes live in the migration rather than the
/// entity, so the account-tables macro applies this one too.
pub static EXTERNAL_LOGIN_PROVIDER_INDEX_SQL: &str =
    "CREATE UNIQUE INDEX \"idx-external_login-provider-provider_account_id\" ON \"external_login\" (\"provider\", \"provider_account_id\")";
