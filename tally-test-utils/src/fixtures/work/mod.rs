use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn work<'a>(&'a self) -> WorkFixtures<'a> {
        WorkFixtures { setup: self }
    }
}

pub struct WorkFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> WorkFixtures<'a> {
    pub async fn insert_client(
        &self,
        account_id: i32,
        name: &str,
    ) -> Result<entity::client::Model, TestError> {
        Ok(entity::prelude::Client::insert(entity::client::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_project(
        &self,
        account_id: i32,
        client_id: Option<i32>,
        title: &str,
    ) -> Result<entity::project::Model, TestError> {
        Ok(entity::prelude::Project::insert(entity::project::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            client_id: ActiveValue::Set(client_id),
            title: ActiveValue::Set(title.to_string()),
            status: ActiveValue::Set("NOT_STARTED".to_string()),
            priority: ActiveValue::Set("MEDIUM".to_string()),
            worked_seconds: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_side_project(
        &self,
        account_id: i32,
        title: &str,
    ) -> Result<entity::side_project::Model, TestError> {
        Ok(
            entity::prelude::SideProject::insert(entity::side_project::ActiveModel {
                account_id: ActiveValue::Set(account_id),
                title: ActiveValue::Set(title.to_string()),
                status: ActiveValue::Set("NOT_STARTED".to_string()),
                priority: ActiveValue::Set("MEDIUM".to_string()),
                worked_seconds: ActiveValue::Set(0),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_invoice(
        &self,
        account_id: i32,
        client_id: Option<i32>,
        invoice_number: &str,
        amount: f64,
        status: &str,
    ) -> Result<entity::invoice::Model, TestError> {
        Ok(entity::prelude::Invoice::insert(entity::invoice::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            client_id: ActiveValue::Set(client_id),
            invoice_number: ActiveValue::Set(invoice_number.to_string()),
            amount: ActiveValue::Set(amount),
            status: ActiveValue::Set(status.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_active_timer(
        &self,
        account_id: i32,
        project_id: Option<i32>,
    ) -> Result<entity::timer::Model, TestError> {
        Ok(entity::prelude::Timer::insert(entity::timer::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            project_id: ActiveValue::Set(project_id),
            started_at: ActiveValue::Set(Utc::now().naive_utc()),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a timer that started in the past and is still running, for
    /// exercising non-zero stop durations.
    pub async fn insert_active_timer_started_at(
        &self,
        account_id: i32,
        project_id: Option<i32>,
        started_at: chrono::NaiveDateTime,
    ) -> Result<entity::timer::Model, TestError> {
        Ok(entity::prelude::Timer::insert(entity::timer::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            project_id: ActiveValue::Set(project_id),
            started_at: ActiveValue::Set(started_at),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_stopped_timer(
        &self,
        account_id: i32,
        project_id: Option<i32>,
        duration_seconds: i64,
    ) -> Result<entity::timer::Model, TestError> {
        let started_at = Utc::now().naive_utc() - chrono::Duration::seconds(duration_seconds);

        Ok(entity::prelude::Timer::insert(entity::timer::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            project_id: ActiveValue::Set(project_id),
            started_at: ActiveValue::Set(started_at),
            ended_at: ActiveValue::Set(Some(Utc::now().naive_utc())),
            duration_seconds: ActiveValue::Set(Some(duration_seconds)),
            is_active: ActiveValue::Set(false),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
