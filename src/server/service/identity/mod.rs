//! Identity resolution service layer.
//!
//! Both sign-in surfaces funnel into this module: the chat bot with a bare
//! platform user id, the OAuth callback with a verified provider login.
//! Resolution lands every assertion on exactly one account row, creating,
//! linking, or merging as needed. The chat platform's provider returns the
//! platform user id as the provider account id, which is the thread that
//! ties a web sign-in back to an account first created through the bot.

pub mod merge;


use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::identity::{
        external_login::ExternalLoginRepository, AccountPatch, AccountRepository, NewAccount,
    },
    error::{identity::IdentityError, Error},
    model::identity::{ChatAssertion, OauthAssertion},
};

/// Service for resolving identity assertions to canonical accounts.
pub struct IdentityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IdentityService<'a> {
    /// Creates a new instance of [`IdentityService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a chat-surface assertion to an account.
    ///
    /// Finds the account owning the platform user id, or creates a
    /// provisional one carrying only the chat identity. The chat path never
    /// merges; an OAuth sign-in later claims or reconciles the row.
    ///
    /// # Returns
    /// - `Ok(Model)` - The existing or freshly created account
    /// - `Err(Error::IdentityError(IdentityError::Conflict))` - A concurrent
    ///   resolution created the account between lookup and insert
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn resolve_chat(
        &self,
        assertion: ChatAssertion,
    ) -> Result<entity::account::Model, Error> {
        let account_repo = AccountRepository::new(self.db);

        if let Some(account) = account_repo
            .find_by_chat_user_id(&assertion.chat_user_id)
            .await?
        {
            return Ok(account);
        }

        let account = account_repo
            .create(NewAccount {
                display_name: assertion.chat_handle.clone(),
                chat_user_id: Some(assertion.chat_user_id),
                chat_handle: assertion.chat_handle,
                ..Default::default()
            })
            .await
            .map_err(|e| {
                map_unique_violation(e, "concurrent account creation for the same chat user id")
            })?;

        tracing::info!(account_id = account.id, "created account from chat identity");

        Ok(account)
    }

    /// Resolves an OAuth-callback assertion to an account.
    ///
    /// # Behavior
    /// - A known provider login resolves to its bound account
    /// - Otherwise a verified email claims the account holding it
    /// - When the asserted chat id belongs to a different account than the
    ///   one the login or email resolved to, the two are merged with the
    ///   chat-created account as the survivor
    /// - With no account on any axis, one is created from the assertion
    /// - The login is bound and mutable profile fields are refreshed; the
    ///   unique columns (email, chat id) are only ever filled when empty
    ///
    /// The whole resolution runs in one transaction, so a failed merge or a
    /// lost uniqueness race leaves no partial state behind.
    ///
    /// # Returns
    /// - `Ok(Model)` - The canonical account for this login
    /// - `Err(Error::IdentityError(IdentityError::Conflict))` - A uniqueness
    ///   invariant would be violated; surfaced, never auto-resolved
    /// - `Err(Error::DbErr)` - Database operation failed; transaction rolled back
    pub async fn resolve_oauth(
        &self,
        assertion: OauthAssertion,
    ) -> Result<entity::account::Model, Error> {
        let txn = self.db.begin().await?;
        let account = resolve_oauth_assertion(&txn, assertion).await?;
        txn.commit().await?;

        Ok(account)
    }
}

async fn resolve_oauth_assertion<C: ConnectionTrait>(
    db: &C,
    assertion: OauthAssertion,
) -> Result<entity::account::Model, Error> {
    let account_repo = AccountRepository::new(db);
    let login_repo = ExternalLoginRepository::new(db);

    let (login_bound, mut resolved) = match login_repo
        .find_by_provider_account(&assertion.provider, &assertion.provider_account_id)
        .await?
    {
        Some((_, Some(account))) => (true, Some(account)),
        Some((login, None)) => {
            return Err(Error::InternalError(format!(
                "External login ID {} has no account despite the foreign key",
                login.id
            )))
        }
        None => (false, None),
    };

    // Without a login row, a verified email claims the account holding it.
    if resolved.is_none() {
        if let Some(email) = &assertion.email {
            resolved = account_repo.find_by_email(email).await?;
        }
    }

    let chat_account = match &assertion.chat_user_id {
        Some(chat_user_id) => account_repo.find_by_chat_user_id(chat_user_id).await?,
        None => None,
    };

    let account = match (resolved, chat_account) {
        (None, None) => {
            let account = account_repo
                .create(NewAccount {
                    email: assertion.email.clone(),
                    display_name: assertion.display_name.clone(),
                    avatar_url: assertion.avatar_url.clone(),
                    chat_user_id: assertion.chat_user_id.clone(),
                    chat_handle: assertion.chat_handle.clone(),
                })
                .await
                .map_err(|e| {
                    map_unique_violation(e, "concurrent account creation for the same identity")
                })?;

            tracing::info!(account_id = account.id, "created account from oauth identity");

            account
        }
        // Only a bot-created account exists; the login attaches to it.
        (None, Some(chat_account)) => chat_account,
        (Some(account), None) => account,
        (Some(account), Some(chat_account)) if account.id == chat_account.id => account,
        // Same person split across two rows; the chat-created account wins.
        (Some(account), Some(chat_account)) => {
            let result = merge::merge_accounts(db, chat_account.id, account.id).await?;

            tracing::info!(
                kept_account_id = result.kept_account.id,
                removed_account_id = result.removed_account_id,
                "merged accounts resolved by one oauth login"
            );

            result.kept_account
        }
    };

    if !login_bound {
        login_repo
            .create(account.id, &assertion.provider, &assertion.provider_account_id)
            .await
            .map_err(|e| {
                map_unique_violation(e, "provider login bound by a concurrent sign-in")
            })?;
    }

    // Refresh mutable profile fields. Unique columns are fill-if-empty only,
    // so a stale provider email can never steal another account's address.
    let mut patch = AccountPatch::default();
    if account.email.is_none() {
        patch.email = assertion.email;
    }
    if assertion.display_name.is_some() && account.display_name != assertion.display_name {
        patch.display_name = assertion.display_name;
    }
    if assertion.avatar_url.is_some() && account.avatar_url != assertion.avatar_url {
        patch.avatar_url = assertion.avatar_url;
    }
    if account.chat_user_id.is_none() {
        patch.chat_user_id = assertion.chat_user_id;
    }
    if assertion.chat_handle.is_some() && account.chat_handle != assertion.chat_handle {
        patch.chat_handle = assertion.chat_handle;
    }

    if patch.is_empty() {
        return Ok(account);
    }

    let account_id = account.id;
    account_repo
        .update(account_id, patch)
        .await
        .map_err(|e| {
            map_unique_violation(e, "profile refresh collided with another account's unique value")
        })?
        .ok_or_else(|| IdentityError::AccountNotFound(account_id).into())
}

/// Translate a lost uniqueness race into the domain conflict error; other
/// database failures pass through unchanged.
fn map_unique_violation(err: DbErr, context: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            IdentityError::Conflict(context.to_string()).into()
        }
        _ => err.into(),
    }
}
