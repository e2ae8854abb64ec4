use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tally::{
    model::account::AccountDto,
    server::{controller::auth::get_account, model::session::account::SessionAccountId},
};
use tally_test_utils::prelude::*;

use crate::util::TestSetupExt;

#[tokio::test]
/// Expect 200 with the signed-in account's details
async fn returns_account_for_signed_in_session() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(Some("casey@example.com")).await?;

    SessionAccountId::insert(&test.session, account.id)
        .await
        .unwrap();

    let result = get_account(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: AccountDto = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.id, account.id);
    assert_eq!(body.email.as_deref(), Some("casey@example.com"));

    Ok(())
}

#[tokio::test]
/// Expect 404 when nothing is signed in
async fn returns_not_found_without_session() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;

    let result = get_account(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 404 and a cleared session when the account row is gone
async fn clears_session_when_account_row_is_gone() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;

    // Stale session pointing at an account that was merged or torn down
    SessionAccountId::insert(&test.session, 9999)
        .await
        .unwrap();

    let result = get_account(State(test.state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let account_id = SessionAccountId::get(&test.session).await.unwrap();
    assert!(account_id.is_none());

    Ok(())
}
