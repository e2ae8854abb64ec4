use chrono::NaiveDateTime;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, UpdateResult,
};

pub struct TimerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimerRepository<'a, C> {
    /// Creates a new instance of [`TimerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Starts a running timer for an account.
    ///
    /// The partial unique index over active timers rejects a second running
    /// timer for the same account; that violation surfaces as [`DbErr`] and
    /// is the backstop for racing starts.
    pub async fn create_active(
        &self,
        account_id: i32,
        project_id: Option<i32>,
        started_at: NaiveDateTime,
    ) -> Result<entity::timer::Model, DbErr> {
        let timer = entity::timer::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            project_id: ActiveValue::Set(project_id),
            started_at: ActiveValue::Set(started_at),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        };

        timer.insert(self.db).await
    }

    /// Finds the account's running timer, if any.
    pub async fn find_active(
        &self,
        account_id: i32,
    ) -> Result<Option<entity::timer::Model>, DbErr> {
        entity::prelude::Timer::find()
            .filter(entity::timer::Column::AccountId.eq(account_id))
            .filter(entity::timer::Column::IsActive.eq(true))
            .one(self.db)
            .await
    }

    /// Returns the account's completed timers, newest started first.
    ///
    /// A still-running timer is excluded; it belongs to [`Self::find_active`]
    /// until it is stopped.
    pub async fn find_history(
        &self,
        account_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::timer::Model>, DbErr> {
        entity::prelude::Timer::find()
            .filter(entity::timer::Column::AccountId.eq(account_id))
            .filter(entity::timer::Column::IsActive.eq(false))
            .order_by_desc(entity::timer::Column::StartedAt)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Marks a running timer as stopped with its final duration.
    pub async fn complete(
        &self,
        timer: entity::timer::Model,
        ended_at: NaiveDateTime,
        duration_seconds: i64,
    ) -> Result<entity::timer::Model, DbErr> {
        let mut timer_am = timer.into_active_model();
        timer_am.ended_at = ActiveValue::Set(Some(ended_at));
        timer_am.duration_seconds = ActiveValue::Set(Some(duration_seconds));
        timer_am.is_active = ActiveValue::Set(false);

        timer_am.update(self.db).await
    }

    /// Moves every timer row from one account to another.
    pub async fn repoint_account(
        &self,
        from_account_id: i32,
        to_account_id: i32,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::Timer::update_many()
            .col_expr(entity::timer::Column::AccountId, Expr::value(to_account_id))
            .filter(entity::timer::Column::AccountId.eq(from_account_id))
            .exec(self.db)
            .await
    }

    pub async fn delete_by_account(&self, account_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Timer::delete_many()
            .filter(entity::timer::Column::AccountId.eq(account_id))
            .exec(self.db)
            .await
    }
}
