//! Identity record repositories.
//!
//! Account rows plus the two row families that hang off them: external
//! provider logins and issued sessions. Merge and teardown flows re-point or
//! delete these rows in bulk, so the submodule repositories expose
//! account-scoped operations alongside the usual lookups.

pub mod external_login;
pub mod session;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Column values for a freshly created account row.
///
/// Every identity field is optional: a chat-created account has only the
/// platform ids, an OAuth-created account has whatever the provider shared.
#[derive(Clone, Debug, Default)]
pub struct NewAccount {
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub chat_user_id: Option<String>,
    pub chat_handle: Option<String>,
}

/// Column updates for an existing account; `None` leaves a column untouched.
#[derive(Clone, Debug, Default)]
pub struct AccountPatch {
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub chat_user_id: Option<String>,
    pub chat_handle: Option<String>,
}

impl AccountPatch {
    /// True when the patch would change no column.
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.display_name.is_none()
            && self.avatar_url.is_none()
            && self.chat_user_id.is_none()
            && self.chat_handle.is_none()
    }
}

pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    /// Creates a new instance of [`AccountRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new account
    ///
    /// Unique collisions on email or chat user id surface as [`DbErr`];
    /// callers translate those into domain conflicts.
    pub async fn create(&self, new: NewAccount) -> Result<entity::account::Model, DbErr> {
        let account = entity::account::ActiveModel {
            email: ActiveValue::Set(new.email),
            display_name: ActiveValue::Set(new.display_name),
            avatar_url: ActiveValue::Set(new.avatar_url),
            chat_user_id: ActiveValue::Set(new.chat_user_id),
            chat_handle: ActiveValue::Set(new.chat_handle),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        account.insert(self.db).await
    }

    pub async fn get(&self, account_id: i32) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find_by_id(account_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn find_by_chat_user_id(
        &self,
        chat_user_id: &str,
    ) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::ChatUserId.eq(chat_user_id))
            .one(self.db)
            .await
    }

    /// Applies the set fields of a patch to an account.
    ///
    /// An empty patch performs no UPDATE and returns the current row.
    /// Returns `Ok(None)` when the account does not exist.
    pub async fn update(
        &self,
        account_id: i32,
        patch: AccountPatch,
    ) -> Result<Option<entity::account::Model>, DbErr> {
        if patch.is_empty() {
            return self.get(account_id).await;
        }

        let account = match entity::prelude::Account::find_by_id(account_id)
            .one(self.db)
            .await?
        {
            Some(account) => account,
            None => return Ok(None),
        };

        let mut account_am = account.into_active_model();
        if let Some(email) = patch.email {
            account_am.email = ActiveValue::Set(Some(email));
        }
        if let Some(display_name) = patch.display_name {
            account_am.display_name = ActiveValue::Set(Some(display_name));
        }
        if let Some(avatar_url) = patch.avatar_url {
            account_am.avatar_url = ActiveValue::Set(Some(avatar_url));
        }
        if let Some(chat_user_id) = patch.chat_user_id {
            account_am.chat_user_id = ActiveValue::Set(Some(chat_user_id));
        }
        if let Some(chat_handle) = patch.chat_handle {
            account_am.chat_handle = ActiveValue::Set(Some(chat_handle));
        }

        let account = account_am.update(self.db).await?;

        Ok(Some(account))
    }

    /// Deletes an account
    ///
    /// Returns OK regardless of the account existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, account_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Account::delete_by_id(account_id)
            .exec(self.db)
            .await
    }
}
