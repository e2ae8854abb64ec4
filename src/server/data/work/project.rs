use chrono::{NaiveDateTime, Utc};
use migration::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, UpdateResult,
};

/// Column values for a new project row.
#[derive(Clone, Debug)]
pub struct NewProject {
    pub account_id: i32,
    pub client_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub due_date: Option<NaiveDateTime>,
}

pub struct ProjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectRepository<'a, C> {
    /// Creates a new instance of [`ProjectRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new project with a zeroed work accumulator
    pub async fn create(&self, new: NewProject) -> Result<entity::project::Model, DbErr> {
        let project = entity::project::ActiveModel {
            account_id: ActiveValue::Set(new.account_id),
            client_id: ActiveValue::Set(new.client_id),
            title: ActiveValue::Set(new.title),
            description: ActiveValue::Set(new.description),
            status: ActiveValue::Set(new.status),
            priority: ActiveValue::Set(new.priority),
            worked_seconds: ActiveValue::Set(0),
            due_date: ActiveValue::Set(new.due_date),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        project.insert(self.db).await
    }

    pub async fn get(&self, project_id: i32) -> Result<Option<entity::project::Model>, DbErr> {
        entity::prelude::Project::find_by_id(project_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_account(
        &self,
        account_id: i32,
    ) -> Result<Vec<entity::project::Model>, DbErr> {
        entity::prelude::Project::find()
            .filter(entity::project::Column::AccountId.eq(account_id))
            .order_by_desc(entity::project::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Adds elapsed seconds onto the project's work accumulator in place.
    ///
    /// The addition happens in SQL so two concurrent stops cannot lose an
    /// increment to a read-modify-write race.
    pub async fn increment_worked_seconds(
        &self,
        project_id: i32,
        seconds: i64,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::Project::update_many()
            .col_expr(
                entity::project::Column::WorkedSeconds,
                Expr::col(entity::project::Column::WorkedSeconds).add(seconds),
            )
            .filter(entity::project::Column::Id.eq(project_id))
            .exec(self.db)
            .await
    }

    /// Moves every project row from one account to another.
    pub async fn repoint_account(
        &self,
        from_account_id: i32,
        to_account_id: i32,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::Project::update_many()
            .col_expr(
                entity::project::Column::AccountId,
                Expr::value(to_account_id),
            )
            .filter(entity::project::Column::AccountId.eq(from_account_id))
            .exec(self.db)
            .await
    }

    pub async fn delete_by_account(&self, account_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Project::delete_many()
            .filter(entity::project::Column::AccountId.eq(account_id))
            .exec(self.db)
            .await
    }
}
