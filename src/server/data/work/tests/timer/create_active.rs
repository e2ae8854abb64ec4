//! Tests for TimerRepository::create_active method.
//!
//! This module verifies running-timer creation, including the partial unique
//! index that admits at most one active timer per account.

use super::*;

/// Tests creating a running timer with no project binding.
///
/// Verifies that the created row is active, carries no end data yet, and
/// belongs to the right account.
///
/// Expected: Ok(timer) with is_active true
#[tokio::test]
async fn creates_running_timer() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(None).await?;

    let timer_repository = TimerRepository::new(&test.db);
    let result = timer_repository
        .create_active(account.id, None, chrono::Utc::now().naive_utc())
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let timer = result.unwrap();
    assert!(timer.is_active);
    assert_eq!(timer.account_id, account.id);
    assert!(timer.project_id.is_none());
    assert!(timer.ended_at.is_none());
    assert!(timer.duration_seconds.is_none());

    Ok(())
}

/// Tests creating a running timer bound to a project.
///
/// Expected: Ok(timer) with the project id recorded
#[tokio::test]
async fn binds_timer_to_project() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(None).await?;
    let project = test
        .work()
        .insert_project(account.id, None, "Brand illustration")
        .await?;

    let timer_repository = TimerRepository::new(&test.db);
    let timer = timer_repository
        .create_active(account.id, Some(project.id), chrono::Utc::now().naive_utc())
        .await?;

    assert_eq!(timer.project_id, Some(project.id));

    Ok(())
}

/// Tests that a second running timer for the same account is rejected.
///
/// The unique index over active timers is the database-level guarantee that
/// two racing starts cannot both succeed.
///
/// Expected: Err for the second insert
#[tokio::test]
async fn fails_for_second_active_timer_same_account() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(None).await?;
    let _ = test.work().insert_active_timer(account.id, None).await?;

    let timer_repository = TimerRepository::new(&test.db);
    let result = timer_repository
        .create_active(account.id, None, chrono::Utc::now().naive_utc())
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that different accounts can run timers at the same time.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_active_timers_on_distinct_accounts() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let first = test.account().insert_account(Some("a@example.com")).await?;
    let second = test.account().insert_account(Some("b@example.com")).await?;

    let timer_repository = TimerRepository::new(&test.db);
    let now = chrono::Utc::now().naive_utc();

    let first_timer = timer_repository.create_active(first.id, None, now).await;
    let second_timer = timer_repository.create_active(second.id, None, now).await;

    assert!(first_timer.is_ok());
    assert!(second_timer.is_ok());

    Ok(())
}

/// Tests that a stopped timer does not block a new start.
///
/// The index only covers rows where is_active holds, so history rows never
/// collide with a fresh running timer.
///
/// Expected: Ok for the new timer
#[tokio::test]
async fn allows_new_timer_after_previous_stopped() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(None).await?;
    let _ = test.work().insert_stopped_timer(account.id, None, 300).await?;

    let timer_repository = TimerRepository::new(&test.db);
    let result = timer_repository
        .create_active(account.id, None, chrono::Utc::now().naive_utc())
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);

    Ok(())
}
