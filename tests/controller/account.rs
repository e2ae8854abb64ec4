use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;
use tally::{
    model::account::ClearedDataDto,
    server::{
        controller::account::{clear_data, ClearDataParams},
        model::session::account::SessionAccountId,
    },
};
use tally_test_utils::prelude::*;

use crate::util::TestSetupExt;

/// Create a test setup with a signed-in account that owns one row per
/// workload table.
async fn setup() -> Result<(TestSetup, entity::account::Model), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(Some("casey@example.com")).await?;

    SessionAccountId::insert(&test.session, account.id)
        .await
        .unwrap();

    let client = test.work().insert_client(account.id, "Moonlight Press").await?;
    test.work()
        .insert_project(account.id, Some(client.id), "Logo")
        .await?;
    test.work().insert_side_project(account.id, "Zine").await?;
    test.work()
        .insert_invoice(account.id, Some(client.id), "INV-001", 250.0, "PAID")
        .await?;
    test.work().insert_stopped_timer(account.id, None, 100).await?;

    Ok((test, account))
}

#[tokio::test]
/// Expect 200 with per-table counts and the account row kept
async fn clears_workload_data() -> Result<(), TestError> {
    let (test, account) = setup().await?;

    let result = clear_data(
        State(test.state()),
        test.session.clone(),
        Query(ClearDataParams {
            delete_account: false,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: ClearedDataDto = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.timers, 1);
    assert_eq!(body.invoices, 1);
    assert_eq!(body.projects, 1);
    assert_eq!(body.side_projects, 1);
    assert_eq!(body.clients, 1);
    assert!(!body.account_deleted);

    // Account survives and stays signed in
    let row = entity::prelude::Account::find_by_id(account.id)
        .one(&test.db)
        .await?;
    assert!(row.is_some());
    let account_id = SessionAccountId::get(&test.session).await.unwrap();
    assert_eq!(account_id, Some(account.id));

    Ok(())
}

#[tokio::test]
/// Expect 200 with the account row deleted and the session cleared
async fn deletes_account_and_clears_session() -> Result<(), TestError> {
    let (test, account) = setup().await?;

    let result = clear_data(
        State(test.state()),
        test.session.clone(),
        Query(ClearDataParams {
            delete_account: true,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: ClearedDataDto = serde_json::from_slice(&bytes).unwrap();
    assert!(body.account_deleted);

    let row = entity::prelude::Account::find_by_id(account.id)
        .one(&test.db)
        .await?;
    assert!(row.is_none());
    let account_id = SessionAccountId::get(&test.session).await.unwrap();
    assert!(account_id.is_none());

    Ok(())
}
