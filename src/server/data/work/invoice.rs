use chrono::{NaiveDateTime, Utc};
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, UpdateResult,
};

/// Column values for a new invoice row.
#[derive(Clone, Debug)]
pub struct NewInvoice {
    pub account_id: i32,
    pub client_id: Option<i32>,
    pub invoice_number: String,
    pub amount: f64,
    pub description: Option<String>,
    pub status: String,
    pub due_date: Option<NaiveDateTime>,
}

pub struct InvoiceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InvoiceRepository<'a, C> {
    /// Creates a new instance of [`InvoiceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, new: NewInvoice) -> Result<entity::invoice::Model, DbErr> {
        let invoice = entity::invoice::ActiveModel {
            account_id: ActiveValue::Set(new.account_id),
            client_id: ActiveValue::Set(new.client_id),
            invoice_number: ActiveValue::Set(new.invoice_number),
            amount: ActiveValue::Set(new.amount),
            description: ActiveValue::Set(new.description),
            status: ActiveValue::Set(new.status),
            due_date: ActiveValue::Set(new.due_date),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        invoice.insert(self.db).await
    }

    pub async fn find_by_account(
        &self,
        account_id: i32,
    ) -> Result<Vec<entity::invoice::Model>, DbErr> {
        entity::prelude::Invoice::find()
            .filter(entity::invoice::Column::AccountId.eq(account_id))
            .order_by_desc(entity::invoice::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Moves every invoice row from one account to another.
    pub async fn repoint_account(
        &self,
        from_account_id: i32,
        to_account_id: i32,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::Invoice::update_many()
            .col_expr(
                entity::invoice::Column::AccountId,
                Expr::value(to_account_id),
            )
            .filter(entity::invoice::Column::AccountId.eq(from_account_id))
            .exec(self.db)
            .await
    }

    pub async fn delete_by_account(&self, account_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Invoice::delete_many()
            .filter(entity::invoice::Column::AccountId.eq(account_id))
            .exec(self.db)
            .await
    }
}
