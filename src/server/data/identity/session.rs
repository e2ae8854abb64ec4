use chrono::{NaiveDateTime, Utc};
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, UpdateResult,
};

pub struct SessionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SessionRepository<'a, C> {
    /// Creates a new instance of [`SessionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records an issued session token for an account
    pub async fn create(
        &self,
        account_id: i32,
        token: &str,
        expires_at: NaiveDateTime,
    ) -> Result<entity::session::Model, DbErr> {
        let session = entity::session::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            token: ActiveValue::Set(token.to_string()),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        session.insert(self.db).await
    }

    pub async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<entity::session::Model>, DbErr> {
        entity::prelude::Session::find()
            .filter(entity::session::Column::Token.eq(token))
            .one(self.db)
            .await
    }

    pub async fn find_by_account(
        &self,
        account_id: i32,
    ) -> Result<Vec<entity::session::Model>, DbErr> {
        entity::prelude::Session::find()
            .filter(entity::session::Column::AccountId.eq(account_id))
            .all(self.db)
            .await
    }

    /// Moves every session row from one account to another.
    ///
    /// The affected row count is reported via [`UpdateResult::rows_affected`].
    pub async fn repoint_account(
        &self,
        from_account_id: i32,
        to_account_id: i32,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::Session::update_many()
            .col_expr(
                entity::session::Column::AccountId,
                Expr::value(to_account_id),
            )
            .filter(entity::session::Column::AccountId.eq(from_account_id))
            .exec(self.db)
            .await
    }

    pub async fn delete_by_token(&self, token: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Session::delete_many()
            .filter(entity::session::Column::Token.eq(token))
            .exec(self.db)
            .await
    }

    pub async fn delete_by_account(&self, account_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Session::delete_many()
            .filter(entity::session::Column::AccountId.eq(account_id))
            .exec(self.db)
            .await
    }

    /// Sweeps sessions whose expiry has passed.
    ///
    /// Called opportunistically when a new session is issued; there is no
    /// background job for this.
    pub async fn delete_expired(&self, now: NaiveDateTime) -> Result<DeleteResult, DbErr> {
        entity::prelude::Session::delete_many()
            .filter(entity::session::Column::ExpiresAt.lt(now))
            .exec(self.db)
            .await
    }
}
