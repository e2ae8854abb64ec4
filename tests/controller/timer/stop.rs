use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use sea_orm::EntityTrait;
use tally::{
    model::timer::TimerDto,
    server::{controller::timer::stop, model::session::account::SessionAccountId},
};
use tally_test_utils::prelude::*;

use crate::util::TestSetupExt;

/// Create a test setup with a signed-in account.
async fn setup() -> Result<(TestSetup, entity::account::Model), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(Some("casey@example.com")).await?;

    SessionAccountId::insert(&test.session, account.id)
        .await
        .unwrap();

    Ok((test, account))
}

#[tokio::test]
/// Expect 200 with the completed timer and the project's time credited
async fn stops_running_timer_and_credits_project() -> Result<(), TestError> {
    let (mut test, account) = setup().await?;
    let project = test.work().insert_project(account.id, None, "Logo").await?;

    let started_at = Utc::now().naive_utc() - chrono::Duration::seconds(125);
    test.work()
        .insert_active_timer_started_at(account.id, Some(project.id), started_at)
        .await?;

    let result = stop(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: TimerDto = serde_json::from_slice(&bytes).unwrap();
    assert!(!body.is_active);
    assert!(body.ended_at.is_some());
    assert!(body.duration_seconds.unwrap() >= 125);

    let project = entity::prelude::Project::find_by_id(project.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert!(project.worked_seconds >= 125);

    Ok(())
}

#[tokio::test]
/// Expect 404 when no timer is running for the account
async fn fails_when_no_timer_running() -> Result<(), TestError> {
    let (test, _account) = setup().await?;

    let result = stop(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
