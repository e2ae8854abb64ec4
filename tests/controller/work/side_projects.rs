use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tally::{
    model::work::{CreateSideProjectDto, SideProjectDto},
    server::{
        controller::work::{create_side_project, list_side_projects},
        model::session::account::SessionAccountId,
    },
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
/// Expect 200 with NOT_STARTED status and default priority
async fn creates_side_project_with_defaults() -> Result<(), TestError> {
    let (test, _account) = setup().await?;

    let result = create_side_project(
        State(test.state()),
        test.session.clone(),
        Json(CreateSideProjectDto {
            title: "Zine".to_string(),
            description: None,
            priority: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: SideProjectDto = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.title, "Zine");
    assert_eq!(body.status, "NOT_STARTED");
    assert_eq!(body.priority, "MEDIUM");
    assert_eq!(body.worked_seconds, 0);

    Ok(())
}

#[tokio::test]
/// Expect the list to contain only the signed-in account's side projects
async fn lists_only_own_side_projects() -> Result<(), TestError> {
    let (mut test, account) = setup().await?;
    let other = test.account().insert_account(Some("other@example.com")).await?;

    let own = test.work().insert_side_project(account.id, "Zine").await?;
    test.work().insert_side_project(other.id, "Game jam").await?;

    let result = list_side_projects(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Vec<SideProjectDto> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].id, own.id);

    Ok(())
}
