use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PROVIDER, error::TestError, TestSetup};

impl TestSetup {
    pub fn account<'a>(&'a mut self) -> AccountFixtures<'a> {
        AccountFixtures { setup: self }
    }
}

pub struct AccountFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> AccountFixtures<'a> {
    /// Insert a bare account with an optional email and no chat identity.
    pub async fn insert_account(
        &self,
        email: Option<&str>,
    ) -> Result<entity::account::Model, TestError> {
        Ok(entity::prelude::Account::insert(entity::account::ActiveModel {
            email: ActiveValue::Set(email.map(str::to_string)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert an account first contacted through the chat bot.
    pub async fn insert_chat_account(
        &self,
        chat_user_id: &str,
        chat_handle: &str,
    ) -> Result<entity::account::Model, TestError> {
        Ok(entity::prelude::Account::insert(entity::account::ActiveModel {
            chat_user_id: ActiveValue::Set(Some(chat_user_id.to_string())),
            chat_handle: ActiveValue::Set(Some(chat_handle.to_string())),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert an account with an email, display name, and a bound external
    /// login, as the OAuth sign-in path would create it.
    pub async fn insert_oauth_account(
        &mut self,
        email: &str,
        display_name: &str,
        provider_account_id: &str,
    ) -> Result<(entity::account::Model, entity::external_login::Model), TestError> {
        let account =
            entity::prelude::Account::insert(entity::account::ActiveModel {
                email: ActiveValue::Set(Some(email.to_string())),
                display_name: ActiveValue::Set(Some(display_name.to_string())),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?;

        let login = self
            .insert_external_login(account.id, provider_account_id)
            .await?;

        Ok((account, login))
    }

    pub async fn insert_external_login(
        &self,
        account_id: i32,
        provider_account_id: &str,
    ) -> Result<entity::external_login::Model, TestError> {
        Ok(entity::prelude::ExternalLogin::insert(
            entity::external_login::ActiveModel {
                account_id: ActiveValue::Set(account_id),
                provider: ActiveValue::Set(TEST_PROVIDER.to_string()),
                provider_account_id: ActiveValue::Set(provider_account_id.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_session(
        &self,
        account_id: i32,
        token: &str,
    ) -> Result<entity::session::Model, TestError> {
        Ok(entity::prelude::Session::insert(entity::session::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            token: ActiveValue::Set(token.to_string()),
            expires_at: ActiveValue::Set(Utc::now().naive_utc() + chrono::Duration::days(7)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
