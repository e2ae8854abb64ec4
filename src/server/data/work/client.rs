use chrono::Utc;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, UpdateResult,
};

pub struct ClientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClientRepository<'a, C> {
    /// Creates a new instance of [`ClientRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        account_id: i32,
        name: &str,
        email: Option<&str>,
        company: Option<&str>,
    ) -> Result<entity::client::Model, DbErr> {
        let client = entity::client::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.map(str::to_string)),
            company: ActiveValue::Set(company.map(str::to_string)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        client.insert(self.db).await
    }

    pub async fn get(&self, client_id: i32) -> Result<Option<entity::client::Model>, DbErr> {
        entity::prelude::Client::find_by_id(client_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_account(
        &self,
        account_id: i32,
    ) -> Result<Vec<entity::client::Model>, DbErr> {
        entity::prelude::Client::find()
            .filter(entity::client::Column::AccountId.eq(account_id))
            .order_by_desc(entity::client::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Finds an account's client by exact name, for find-or-create flows.
    pub async fn find_by_account_and_name(
        &self,
        account_id: i32,
        name: &str,
    ) -> Result<Option<entity::client::Model>, DbErr> {
        entity::prelude::Client::find()
            .filter(entity::client::Column::AccountId.eq(account_id))
            .filter(entity::client::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Moves every client row from one account to another.
    pub async fn repoint_account(
        &self,
        from_account_id: i32,
        to_account_id: i32,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::Client::update_many()
            .col_expr(entity::client::Column::AccountId, Expr::value(to_account_id))
            .filter(entity::client::Column::AccountId.eq(from_account_id))
            .exec(self.db)
            .await
    }

    pub async fn delete_by_account(&self, account_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Client::delete_many()
            .filter(entity::client::Column::AccountId.eq(account_id))
            .exec(self.db)
            .await
    }
}
