use chrono::Utc;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, UpdateResult,
};

/// Column values for a new side project row.
#[derive(Clone, Debug)]
pub struct NewSideProject {
    pub account_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
}

pub struct SideProjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SideProjectRepository<'a, C> {
    /// Creates a new instance of [`SideProjectRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        new: NewSideProject,
    ) -> Result<entity::side_project::Model, DbErr> {
        let side_project = entity::side_project::ActiveModel {
            account_id: ActiveValue::Set(new.account_id),
            title: ActiveValue::Set(new.title),
            description: ActiveValue::Set(new.description),
            status: ActiveValue::Set(new.status),
            priority: ActiveValue::Set(new.priority),
            worked_seconds: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        side_project.insert(self.db).await
    }

    pub async fn find_by_account(
        &self,
        account_id: i32,
    ) -> Result<Vec<entity::side_project::Model>, DbErr> {
        entity::prelude::SideProject::find()
            .filter(entity::side_project::Column::AccountId.eq(account_id))
            .order_by_desc(entity::side_project::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Moves every side project row from one account to another.
    pub async fn repoint_account(
        &self,
        from_account_id: i32,
        to_account_id: i32,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::SideProject::update_many()
            .col_expr(
                entity::side_project::Column::AccountId,
                Expr::value(to_account_id),
            )
            .filter(entity::side_project::Column::AccountId.eq(from_account_id))
            .exec(self.db)
            .await
    }

    pub async fn delete_by_account(&self, account_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::SideProject::delete_many()
            .filter(entity::side_project::Column::AccountId.eq(account_id))
            .exec(self.db)
            .await
    }
}
