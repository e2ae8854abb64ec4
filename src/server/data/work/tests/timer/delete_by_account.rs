//! Tests for TimerRepository::delete_by_account method.

use super::*;

/// Tests that only the given account's timers are deleted.
///
/// Expected: Ok(result) with rows_affected matching the account's rows
#[tokio::test]
async fn deletes_only_that_accounts_timers() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(Some("a@example.com")).await?;
    let bystander = test.account().insert_account(Some("b@example.com")).await?;
    let _ = test.work().insert_active_timer(account.id, None).await?;
    let _ = test.work().insert_stopped_timer(account.id, None, 60).await?;
    let _ = test.work().insert_active_timer(bystander.id, None).await?;

    let timer_repository = TimerRepository::new(&test.db);
    let result = timer_repository.delete_by_account(account.id).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().rows_affected, 2);

    let remaining = timer_repository.find_history(bystander.id, 50).await?;
    assert_eq!(remaining.len(), 1);

    Ok(())
}

/// Tests deleting timers for an account that has none.
///
/// Expected: Ok(result) with zero rows affected
#[tokio::test]
async fn reports_zero_rows_when_none_exist() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(None).await?;

    let timer_repository = TimerRepository::new(&test.db);
    let result = timer_repository.delete_by_account(account.id).await?;

    assert_eq!(result.rows_affected, 0);

    Ok(())
}
