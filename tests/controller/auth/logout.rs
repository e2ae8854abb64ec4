use axum::{extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::EntityTrait;
use tally::server::{
    controller::auth::logout,
    model::session::{account::SessionAccountId, token::SessionToken},
};
use tally_test_utils::prelude::*;

use crate::util::TestSetupExt;

#[tokio::test]
/// Expect 307 to the home page with the database session row deleted
async fn deletes_db_session_and_redirects() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(Some("casey@example.com")).await?;
    test.account().insert_session(account.id, "token-abc").await?;

    SessionAccountId::insert(&test.session, account.id)
        .await
        .unwrap();
    SessionToken::insert(&test.session, "token-abc")
        .await
        .unwrap();

    let result = logout(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let sessions = entity::prelude::Session::find().all(&test.db).await?;
    assert!(sessions.is_empty());

    let account_id = SessionAccountId::get(&test.session).await.unwrap();
    assert!(account_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 307 even when nothing is signed in
async fn returns_redirect_on_logout_with_no_session() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;

    let result = logout(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
