use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tally::{
    model::stats::StatsDto,
    server::{controller::stats::get_stats, model::session::account::SessionAccountId},
};
use tally_test_utils::prelude::*;

use crate::util::TestSetupExt;

#[tokio::test]
/// Expect 200 with counts and revenue computed from the account's rows
async fn returns_workload_summary() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(Some("casey@example.com")).await?;

    SessionAccountId::insert(&test.session, account.id)
        .await
        .unwrap();

    let client = test.work().insert_client(account.id, "Moonlight Press").await?;
    test.work()
        .insert_project(account.id, Some(client.id), "Logo")
        .await?;
    test.work()
        .insert_invoice(account.id, Some(client.id), "INV-001", 250.0, "PAID")
        .await?;
    test.work()
        .insert_invoice(account.id, Some(client.id), "INV-002", 100.0, "SENT")
        .await?;

    let result = get_stats(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: StatsDto = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.projects.total, 1);
    assert_eq!(body.projects.not_started, 1);
    assert_eq!(body.clients.total, 1);
    assert_eq!(body.invoices.total, 2);
    assert_eq!(body.invoices.paid, 1);
    assert_eq!(body.invoices.sent, 1);
    assert_eq!(body.revenue.total, 250.0);
    assert_eq!(body.revenue.pending, 100.0);
    assert_eq!(body.worked_seconds.total, 0);

    Ok(())
}

#[tokio::test]
/// Expect 404 when nothing is signed in
async fn returns_not_found_without_session() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;

    let result = get_stats(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
