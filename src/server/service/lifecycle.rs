//! Account data teardown service layer.
//!
//! Wipes everything an account accumulated, optionally including the
//! account row itself. Child tables go first so no foreign key is ever
//! dangling, and the whole teardown commits as one transaction. Used by the
//! dashboard's clear-data endpoint and the operator purge binary.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::account::ClearedDataDto,
    server::{
        data::{
            identity::{
                external_login::ExternalLoginRepository, session::SessionRepository,
                AccountRepository,
            },
            work::{
                client::ClientRepository, invoice::InvoiceRepository, project::ProjectRepository,
                side_project::SideProjectRepository, timer::TimerRepository,
            },
        },
        error::{identity::IdentityError, Error},
    },
};

/// Service for clearing an account's data and purging accounts.
pub struct LifecycleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LifecycleService<'a> {
    /// Creates a new instance of [`LifecycleService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Deletes the account's workload data, and optionally the account.
    ///
    /// # Behavior
    /// Deletes in dependency order: timers, invoices, projects, side
    /// projects, clients. With `delete_account` set, external logins,
    /// sessions, and the account row follow, leaving nothing behind; a
    /// later sign-in starts from a fresh account. Everything commits in
    /// one transaction.
    ///
    /// # Returns
    /// - `Ok(ClearedDataDto)` - Per-table counts of deleted rows
    /// - `Err(Error::IdentityError(IdentityError::AccountNotFound))` - Unknown account
    /// - `Err(Error::DbErr)` - Database operation failed; transaction rolled back
    pub async fn clear_account_data(
        &self,
        account_id: i32,
        delete_account: bool,
    ) -> Result<ClearedDataDto, Error> {
        let txn = self.db.begin().await?;

        let account_repo = AccountRepository::new(&txn);
        account_repo
            .get(account_id)
            .await?
            .ok_or(IdentityError::AccountNotFound(account_id))?;

        let timers = TimerRepository::new(&txn)
            .delete_by_account(account_id)
            .await?
            .rows_affected;
        let invoices = InvoiceRepository::new(&txn)
            .delete_by_account(account_id)
            .await?
            .rows_affected;
        let projects = ProjectRepository::new(&txn)
            .delete_by_account(account_id)
            .await?
            .rows_affected;
        let side_projects = SideProjectRepository::new(&txn)
            .delete_by_account(account_id)
            .await?
            .rows_affected;
        let clients = ClientRepository::new(&txn)
            .delete_by_account(account_id)
            .await?
            .rows_affected;

        let mut external_logins = 0;
        let mut sessions = 0;
        if delete_account {
            external_logins = ExternalLoginRepository::new(&txn)
                .delete_by_account(account_id)
                .await?
                .rows_affected;
            sessions = SessionRepository::new(&txn)
                .delete_by_account(account_id)
                .await?
                .rows_affected;
            account_repo.delete(account_id).await?;
        }

        txn.commit().await?;

        let cleared = ClearedDataDto {
            timers,
            invoices,
            projects,
            side_projects,
            clients,
            external_logins,
            sessions,
            account_deleted: delete_account,
        };

        tracing::info!(
            account_id,
            timers = cleared.timers,
            invoices = cleared.invoices,
            projects = cleared.projects,
            side_projects = cleared.side_projects,
            clients = cleared.clients,
            account_deleted = cleared.account_deleted,
            "cleared account data"
        );

        Ok(cleared)
    }

    /// Purges the account matching an operator-supplied identifier.
    ///
    /// The identifier is tried as an email first, then as a chat platform
    /// user id, matching how operators see accounts in support requests.
    ///
    /// # Returns
    /// - `Ok(Some((account_id, ClearedDataDto)))` - Account found and cleared
    /// - `Ok(None)` - No account matches the identifier
    /// - `Err(Error)` - Lookup or teardown failed
    pub async fn purge_by_identifier(
        &self,
        identifier: &str,
        delete_account: bool,
    ) -> Result<Option<(i32, ClearedDataDto)>, Error> {
        let account_repo = AccountRepository::new(self.db);

        let account = match account_repo.find_by_email(identifier).await? {
            Some(account) => Some(account),
            None => account_repo.find_by_chat_user_id(identifier).await?,
        };

        let account = match account {
            Some(account) => account,
            None => return Ok(None),
        };

        let cleared = self.clear_account_data(account.id, delete_account).await?;

        Ok(Some((account.id, cleared)))
    }
}
