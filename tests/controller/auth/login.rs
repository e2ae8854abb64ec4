use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tally::{
    model::auth::LoginUrlDto,
    server::{controller::auth::login, model::session::auth::SessionAuthCsrf},
};
use tally_test_utils::prelude::*;

use crate::util::TestSetupExt;

#[tokio::test]
/// Expect 200 with the provider authorization URL in the body
async fn returns_authorization_url() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = login(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: LoginUrlDto = serde_json::from_slice(&bytes).unwrap();
    assert!(body.login_url.contains("/oauth2/authorize"));

    Ok(())
}

#[tokio::test]
/// Expect the CSRF state to be stored in session for the callback to check
async fn stores_csrf_state_in_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = login(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let state = SessionAuthCsrf::get(&test.session).await;
    assert!(state.is_ok());
    assert!(!state.unwrap().is_empty());

    Ok(())
}
