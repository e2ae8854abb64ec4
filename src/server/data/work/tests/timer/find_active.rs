//! Tests for TimerRepository::find_active method.

use super::*;

/// Tests finding the account's running timer.
///
/// Expected: Ok(Some(timer)) with is_active true
#[tokio::test]
async fn finds_running_timer() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(None).await?;
    let timer = test.work().insert_active_timer(account.id, None).await?;

    let timer_repository = TimerRepository::new(&test.db);
    let result = timer_repository.find_active(account.id).await;

    assert!(result.is_ok());
    let found = result.unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, timer.id);

    Ok(())
}

/// Tests that stopped timers are not reported as running.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_no_timer_running() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(None).await?;
    let _ = test.work().insert_stopped_timer(account.id, None, 600).await?;

    let timer_repository = TimerRepository::new(&test.db);
    let result = timer_repository.find_active(account.id).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}

/// Tests that another account's running timer is not returned.
///
/// Expected: Ok(None) for the account without a timer
#[tokio::test]
async fn scopes_to_account() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(Some("a@example.com")).await?;
    let other = test.account().insert_account(Some("b@example.com")).await?;
    let _ = test.work().insert_active_timer(other.id, None).await?;

    let timer_repository = TimerRepository::new(&test.db);
    let result = timer_repository.find_active(account.id).await?;

    assert!(result.is_none());

    Ok(())
}
