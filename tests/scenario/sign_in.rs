use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::EntityTrait;
use tally::server::{
    controller::auth::{callback, login, CallbackParams},
    model::session::{account::SessionAccountId, auth::SessionAuthCsrf},
};
use tally_test_utils::prelude::*;

use crate::util::TestSetupExt;

#[tokio::test]
/// Expect a web sign-in to land on the account the chat bot created,
/// filling its profile fields and binding the provider login
async fn chat_account_claimed_by_web_sign_in() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;

    // The bot saw this platform user first
    let chat_account = test.account().insert_chat_account("1000", "casey#art").await?;
    assert!(chat_account.email.is_none());

    // Provider returns the same platform user id for the web sign-in
    test.mocks = test
        .auth()
        .create_oauth_endpoints("1000", "casey", Some("casey@example.com"));

    let result = login(State(test.state()), test.session.clone()).await;
    assert!(result.is_ok());

    // Continue with the state the login endpoint stored, as the provider
    // would echo it back
    let state = SessionAuthCsrf::get(&test.session).await.unwrap();

    let result = callback(
        State(test.state()),
        test.session.clone(),
        Query(CallbackParams {
            state,
            code: "code".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    // Same canonical account, not a second one
    let account_id = SessionAccountId::get(&test.session).await.unwrap();
    assert_eq!(account_id, Some(chat_account.id));
    assert_eq!(entity::prelude::Account::find().all(&test.db).await?.len(), 1);

    // Verified profile fills the email and refreshes the stale handle
    let account = entity::prelude::Account::find_by_id(chat_account.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(account.email.as_deref(), Some("casey@example.com"));
    assert_eq!(account.display_name.as_deref(), Some("casey"));
    assert_eq!(account.chat_handle.as_deref(), Some("casey"));

    let logins = entity::prelude::ExternalLogin::find().all(&test.db).await?;
    assert_eq!(logins.len(), 1);
    assert_eq!(logins[0].account_id, chat_account.id);
    assert_eq!(logins[0].provider_account_id, "1000");

    test.assert_mocks();

    Ok(())
}
