use chrono::Utc;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, UpdateResult,
};

pub struct ExternalLoginRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExternalLoginRepository<'a, C> {
    /// Creates a new instance of [`ExternalLoginRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Binds a provider identity to an account
    pub async fn create(
        &self,
        account_id: i32,
        provider: &str,
        provider_account_id: &str,
    ) -> Result<entity::external_login::Model, DbErr> {
        let login = entity::external_login::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            provider: ActiveValue::Set(provider.to_string()),
            provider_account_id: ActiveValue::Set(provider_account_id.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        login.insert(self.db).await
    }

    /// Looks up a login by its provider identity, joined with its account.
    ///
    /// The account side is `None` only if the login row is orphaned, which
    /// the foreign key prevents.
    pub async fn find_by_provider_account(
        &self,
        provider: &str,
        provider_account_id: &str,
    ) -> Result<
        Option<(
            entity::external_login::Model,
            Option<entity::account::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::ExternalLogin::find()
            .filter(entity::external_login::Column::Provider.eq(provider))
            .filter(entity::external_login::Column::ProviderAccountId.eq(provider_account_id))
            .find_also_related(entity::account::Entity)
            .one(self.db)
            .await
    }

    pub async fn find_by_account(
        &self,
        account_id: i32,
    ) -> Result<Vec<entity::external_login::Model>, DbErr> {
        entity::prelude::ExternalLogin::find()
            .filter(entity::external_login::Column::AccountId.eq(account_id))
            .all(self.db)
            .await
    }

    /// Moves every login row from one account to another.
    ///
    /// The affected row count is reported via [`UpdateResult::rows_affected`].
    pub async fn repoint_account(
        &self,
        from_account_id: i32,
        to_account_id: i32,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::ExternalLogin::update_many()
            .col_expr(
                entity::external_login::Column::AccountId,
                Expr::value(to_account_id),
            )
            .filter(entity::external_login::Column::AccountId.eq(from_account_id))
            .exec(self.db)
            .await
    }

    pub async fn delete_by_account(&self, account_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ExternalLogin::delete_many()
            .filter(entity::external_login::Column::AccountId.eq(account_id))
            .exec(self.db)
            .await
    }
}
