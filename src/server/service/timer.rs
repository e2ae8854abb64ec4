//! Work timer service layer.
//!
//! Start/stop time tracking against an account, with at most one running
//! timer per account. Stopping computes the elapsed whole seconds and, for
//! a project-bound timer, folds them into the project's work accumulator in
//! the same transaction.

use chrono::Utc;
use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::{
    model::timer::{ActiveTimerDto, TimerDto},
    server::{
        data::work::{project::ProjectRepository, timer::TimerRepository},
        error::{timer::TimerError, Error},
    },
};

/// Completed timers returned by the history view.
const HISTORY_LIMIT: u64 = 50;

/// Service for managing an account's work timers.
pub struct TimerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimerService<'a> {
    /// Creates a new instance of [`TimerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts a timer for the account, optionally bound to a project.
    ///
    /// # Behavior
    /// - Rejects the start when the account already has a running timer
    /// - Rejects a project the account does not own
    /// - A start racing another start loses to the unique active timer
    ///   index and reports the same already-running error
    ///
    /// # Returns
    /// - `Ok(Model)` - The running timer
    /// - `Err(Error::TimerError(TimerError::AlreadyRunning))` - A timer is already running
    /// - `Err(Error::TimerError(TimerError::ProjectNotFound))` - Unknown or foreign project
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn start(
        &self,
        account_id: i32,
        project_id: Option<i32>,
    ) -> Result<entity::timer::Model, Error> {
        let timer_repo = TimerRepository::new(self.db);

        if let Some(project_id) = project_id {
            let project = ProjectRepository::new(self.db).get(project_id).await?;
            match project {
                Some(project) if project.account_id == account_id => {}
                _ => return Err(TimerError::ProjectNotFound(project_id).into()),
            }
        }

        if timer_repo.find_active(account_id).await?.is_some() {
            return Err(TimerError::AlreadyRunning(account_id).into());
        }

        match timer_repo
            .create_active(account_id, project_id, Utc::now().naive_utc())
            .await
        {
            Ok(timer) => Ok(timer),
            // Lost the race against another start between check and insert
            Err(e) => Err(match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    TimerError::AlreadyRunning(account_id).into()
                }
                _ => e.into(),
            }),
        }
    }

    /// Stops the account's running timer.
    ///
    /// The final duration is the elapsed time floored to whole seconds.
    /// For a project-bound timer the same transaction adds the duration to
    /// the project's work accumulator, so the timer row and the accumulator
    /// can never disagree.
    ///
    /// # Returns
    /// - `Ok(Model)` - The completed timer with `ended_at` and `duration_seconds` set
    /// - `Err(Error::TimerError(TimerError::NoActiveTimer))` - Nothing is running
    /// - `Err(Error::DbErr)` - Database operation failed; transaction rolled back
    pub async fn stop(&self, account_id: i32) -> Result<entity::timer::Model, Error> {
        let txn = self.db.begin().await?;
        let timer_repo = TimerRepository::new(&txn);

        let timer = timer_repo
            .find_active(account_id)
            .await?
            .ok_or(TimerError::NoActiveTimer(account_id))?;

        let ended_at = Utc::now().naive_utc();
        let duration_seconds = (ended_at - timer.started_at).num_seconds().max(0);
        let project_id = timer.project_id;

        let timer = timer_repo.complete(timer, ended_at, duration_seconds).await?;

        if let Some(project_id) = project_id {
            ProjectRepository::new(&txn)
                .increment_worked_seconds(project_id, duration_seconds)
                .await?;
        }

        txn.commit().await?;

        tracing::debug!(
            account_id,
            timer_id = timer.id,
            duration_seconds,
            "stopped timer"
        );

        Ok(timer)
    }

    /// Returns the running timer with its elapsed seconds, if one exists.
    ///
    /// Elapsed time is recomputed from `started_at` at read time; nothing
    /// is persisted until the timer stops.
    pub async fn active(&self, account_id: i32) -> Result<Option<ActiveTimerDto>, Error> {
        let timer = TimerRepository::new(self.db).find_active(account_id).await?;

        Ok(timer.map(|timer| {
            let elapsed_seconds = (Utc::now().naive_utc() - timer.started_at)
                .num_seconds()
                .max(0);

            ActiveTimerDto {
                timer: TimerDto::from(timer),
                elapsed_seconds,
            }
        }))
    }

    /// Returns the account's most recent completed timers, newest first.
    pub async fn history(&self, account_id: i32) -> Result<Vec<entity::timer::Model>, Error> {
        let timers = TimerRepository::new(self.db)
            .find_history(account_id, HISTORY_LIMIT)
            .await?;

        Ok(timers)
    }
}
