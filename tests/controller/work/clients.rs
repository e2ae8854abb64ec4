use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tally::{
    model::work::{ClientDto, CreateClientDto},
    server::{
        controller::work::{create_client, list_clients},
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
/// Expect 200 with the created client's details
async fn creates_client() -> Result<(), TestError> {
    let (test, _account) = setup().await?;

    let result = create_client(
        State(test.state()),
        test.session.clone(),
        Json(CreateClientDto {
            name: "Moonlight Press".to_string(),
            email: Some("press@example.com".to_string()),
            company: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: ClientDto = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.name, "Moonlight Press");
    assert_eq!(body.email.as_deref(), Some("press@example.com"));

    Ok(())
}

#[tokio::test]
/// Expect the list to contain only the signed-in account's clients
async fn lists_only_own_clients() -> Result<(), TestError> {
    let (mut test, account) = setup().await?;
    let other = test.account().insert_account(Some("other@example.com")).await?;

    let own = test.work().insert_client(account.id, "Moonlight Press").await?;
    test.work().insert_client(other.id, "Night Owl Games").await?;

    let result = list_clients(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Vec<ClientDto> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].id, own.id);

    Ok(())
}
