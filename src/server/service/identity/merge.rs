//! Account merge: collapse two rows that turned out to be the same person.
//!
//! Triggered when an OAuth sign-in asserts a chat platform id that a
//! bot-created account already owns. Every owned row moves to the kept
//! account, the dropped row is deleted, and the kept account absorbs any
//! identity fields it was missing. All of it lands in one transaction; a
//! failure part way through leaves both accounts untouched.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        identity::{
            external_login::ExternalLoginRepository, session::SessionRepository, AccountPatch,
            AccountRepository,
        },
        work::{
            client::ClientRepository, invoice::InvoiceRepository, project::ProjectRepository,
            side_project::SideProjectRepository, timer::TimerRepository,
        },
    },
    error::{identity::IdentityError, Error},
};

/// Outcome of a completed merge.
#[derive(Clone, Debug)]
pub struct MergeResult {
    /// The surviving account, after absorbing fields from the dropped one.
    pub kept_account: entity::account::Model,
    /// ID of the account row that was deleted.
    pub removed_account_id: i32,
    /// Names of the kept account's columns filled in from the dropped row.
    pub fields_updated: Vec<&'static str>,
}

/// Service for merging two accounts into one.
pub struct MergeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MergeService<'a> {
    /// Creates a new instance of [`MergeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Merges the dropped account into the kept account.
    ///
    /// Runs in its own transaction. Sign-in resolution calls
    /// [`merge_accounts`] directly inside its transaction instead.
    ///
    /// # Behavior
    /// 1. Re-points external logins, sessions, timers, projects, side
    ///    projects, clients, and invoices to the kept account
    /// 2. Deletes the dropped account row, freeing its unique email and
    ///    chat id
    /// 3. Fills identity fields the kept account is missing with the
    ///    dropped account's values; populated fields are never overwritten
    ///
    /// # Returns
    /// - `Ok(MergeResult)` - Merge landed; contains the updated kept account
    /// - `Err(Error::IdentityError(IdentityError::MergeSameAccount))` - Both IDs name the same account
    /// - `Err(Error::IdentityError(IdentityError::AccountNotFound))` - Either account does not exist
    /// - `Err(Error::DbErr)` - Database failure, including the unique active
    ///   timer index rejecting a merge of two accounts that both have a
    ///   running timer; the transaction rolls back
    pub async fn merge(
        &self,
        keep_account_id: i32,
        drop_account_id: i32,
    ) -> Result<MergeResult, Error> {
        let txn = self.db.begin().await?;
        let result = merge_accounts(&txn, keep_account_id, drop_account_id).await?;
        txn.commit().await?;

        tracing::info!(
            kept_account_id = result.kept_account.id,
            removed_account_id = result.removed_account_id,
            "merged duplicate accounts"
        );

        Ok(result)
    }
}

/// Merge body, run on the caller's connection or open transaction.
pub(super) async fn merge_accounts<C: ConnectionTrait>(
    db: &C,
    keep_account_id: i32,
    drop_account_id: i32,
) -> Result<MergeResult, Error> {
    if keep_account_id == drop_account_id {
        return Err(IdentityError::MergeSameAccount(keep_account_id).into());
    }

    let account_repo = AccountRepository::new(db);

    let keep_account = account_repo
        .get(keep_account_id)
        .await?
        .ok_or(IdentityError::AccountNotFound(keep_account_id))?;
    let drop_account = account_repo
        .get(drop_account_id)
        .await?
        .ok_or(IdentityError::AccountNotFound(drop_account_id))?;

    ExternalLoginRepository::new(db)
        .repoint_account(drop_account_id, keep_account_id)
        .await?;
    SessionRepository::new(db)
        .repoint_account(drop_account_id, keep_account_id)
        .await?;
    TimerRepository::new(db)
        .repoint_account(drop_account_id, keep_account_id)
        .await?;
    ProjectRepository::new(db)
        .repoint_account(drop_account_id, keep_account_id)
        .await?;
    SideProjectRepository::new(db)
        .repoint_account(drop_account_id, keep_account_id)
        .await?;
    ClientRepository::new(db)
        .repoint_account(drop_account_id, keep_account_id)
        .await?;
    InvoiceRepository::new(db)
        .repoint_account(drop_account_id, keep_account_id)
        .await?;

    // Delete before fill-in so the dropped row's unique email and chat id
    // are free for the kept account to take.
    account_repo.delete(drop_account_id).await?;

    let mut patch = AccountPatch::default();
    let mut fields_updated = Vec::new();
    if keep_account.email.is_none() {
        if let Some(email) = drop_account.email {
            patch.email = Some(email);
            fields_updated.push("email");
        }
    }
    if keep_account.display_name.is_none() {
        if let Some(display_name) = drop_account.display_name {
            patch.display_name = Some(display_name);
            fields_updated.push("display_name");
        }
    }
    if keep_account.avatar_url.is_none() {
        if let Some(avatar_url) = drop_account.avatar_url {
            patch.avatar_url = Some(avatar_url);
            fields_updated.push("avatar_url");
        }
    }
    if keep_account.chat_user_id.is_none() {
        if let Some(chat_user_id) = drop_account.chat_user_id {
            patch.chat_user_id = Some(chat_user_id);
            fields_updated.push("chat_user_id");
        }
    }
    if keep_account.chat_handle.is_none() {
        if let Some(chat_handle) = drop_account.chat_handle {
            patch.chat_handle = Some(chat_handle);
            fields_updated.push("chat_handle");
        }
    }

    let kept_account = if patch.is_empty() {
        keep_account
    } else {
        account_repo
            .update(keep_account_id, patch)
            .await?
            .ok_or(IdentityError::AccountNotFound(keep_account_id))?
    };

    Ok(MergeResult {
        kept_account,
        removed_account_id: drop_account_id,
        fields_updated,
    })
}
