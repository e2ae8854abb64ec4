//! Tests for ProjectRepository::increment_worked_seconds method.
//!
//! The accumulator addition happens in SQL, so these tests verify the stored
//! value after each call rather than any returned model.

use super::*;

/// Tests adding elapsed seconds to a fresh project.
///
/// Expected: accumulator equals the added amount
#[tokio::test]
async fn adds_seconds_to_accumulator() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(None).await?;
    let project = test
        .work()
        .insert_project(account.id, None, "Album cover")
        .await?;

    let project_repository = ProjectRepository::new(&test.db);
    let result = project_repository
        .increment_worked_seconds(project.id, 125)
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().rows_affected, 1);

    let updated = project_repository.get(project.id).await?.unwrap();
    assert_eq!(updated.worked_seconds, 125);

    Ok(())
}

/// Tests that repeated increments accumulate.
///
/// Expected: accumulator equals the sum of all added amounts
#[tokio::test]
async fn accumulates_across_multiple_increments() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(None).await?;
    let project = test
        .work()
        .insert_project(account.id, None, "Album cover")
        .await?;

    let project_repository = ProjectRepository::new(&test.db);
    project_repository
        .increment_worked_seconds(project.id, 125)
        .await?;
    project_repository
        .increment_worked_seconds(project.id, 300)
        .await?;

    let updated = project_repository.get(project.id).await?.unwrap();
    assert_eq!(updated.worked_seconds, 425);

    Ok(())
}

/// Tests that an increment of zero leaves the accumulator readable and
/// unchanged.
///
/// Expected: accumulator still zero, one row matched
#[tokio::test]
async fn zero_increment_keeps_value() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(None).await?;
    let project = test
        .work()
        .insert_project(account.id, None, "Album cover")
        .await?;

    let project_repository = ProjectRepository::new(&test.db);
    let result = project_repository
        .increment_worked_seconds(project.id, 0)
        .await?;
    assert_eq!(result.rows_affected, 1);

    let updated = project_repository.get(project.id).await?.unwrap();
    assert_eq!(updated.worked_seconds, 0);

    Ok(())
}

/// Tests that other projects are untouched by an increment.
///
/// Expected: only the targeted project's accumulator changes
#[tokio::test]
async fn leaves_other_projects_untouched() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(None).await?;
    let target = test
        .work()
        .insert_project(account.id, None, "Album cover")
        .await?;
    let bystander = test
        .work()
        .insert_project(account.id, None, "Logo sheet")
        .await?;

    let project_repository = ProjectRepository::new(&test.db);
    project_repository
        .increment_worked_seconds(target.id, 500)
        .await?;

    let untouched = project_repository.get(bystander.id).await?.unwrap();
    assert_eq!(untouched.worked_seconds, 0);

    Ok(())
}
