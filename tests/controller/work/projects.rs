use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::EntityTrait;
use tally::{
    model::work::{CreateProjectDto, ProjectDto},
    server::{
        controller::work::{create_project, list_projects},
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

fn project_body(title: &str) -> CreateProjectDto {
    CreateProjectDto {
        title: title.to_string(),
        description: None,
        client_id: None,
        client_name: None,
        priority: None,
        due_date: None,
    }
}

#[tokio::test]
/// Expect 200 with NOT_STARTED status and default priority
async fn creates_project_with_defaults() -> Result<(), TestError> {
    let (test, _account) = setup().await?;

    let result = create_project(
        State(test.state()),
        test.session.clone(),
        Json(project_body("Logo")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: ProjectDto = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.title, "Logo");
    assert_eq!(body.status, "NOT_STARTED");
    assert_eq!(body.priority, "MEDIUM");
    assert_eq!(body.worked_seconds, 0);
    assert!(body.client_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect a client row to be created and bound when one is named
async fn creates_client_from_name() -> Result<(), TestError> {
    let (test, account) = setup().await?;

    let mut body = project_body("Logo");
    body.client_name = Some("Moonlight Press".to_string());

    let result = create_project(State(test.state()), test.session.clone(), Json(body)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let project: ProjectDto = serde_json::from_slice(&bytes).unwrap();
    assert!(project.client_id.is_some());

    let client = entity::prelude::Client::find_by_id(project.client_id.unwrap())
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(client.name, "Moonlight Press");
    assert_eq!(client.account_id, account.id);

    Ok(())
}

#[tokio::test]
/// Expect a second project naming the same client to reuse its row
async fn reuses_client_with_matching_name() -> Result<(), TestError> {
    let (mut test, account) = setup().await?;
    let client = test.work().insert_client(account.id, "Moonlight Press").await?;

    let mut body = project_body("Logo");
    body.client_name = Some("Moonlight Press".to_string());

    let result = create_project(State(test.state()), test.session.clone(), Json(body)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let project: ProjectDto = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(project.client_id, Some(client.id));

    Ok(())
}

#[tokio::test]
/// Expect 404 when the referenced client belongs to another account
async fn fails_for_foreign_client() -> Result<(), TestError> {
    let (mut test, _account) = setup().await?;
    let other = test.account().insert_account(Some("other@example.com")).await?;
    let foreign = test.work().insert_client(other.id, "Night Owl Games").await?;

    let mut body = project_body("Logo");
    body.client_id = Some(foreign.id);

    let result = create_project(State(test.state()), test.session.clone(), Json(body)).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect the list to contain only the signed-in account's projects
async fn lists_only_own_projects() -> Result<(), TestError> {
    let (mut test, account) = setup().await?;
    let other = test.account().insert_account(Some("other@example.com")).await?;

    let own = test.work().insert_project(account.id, None, "Logo").await?;
    test.work().insert_project(other.id, None, "Zine layout").await?;

    let result = list_projects(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Vec<ProjectDto> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].id, own.id);

    Ok(())
}
