//! Tests for ProjectRepository::find_by_account method.

use super::*;

/// Tests that only the account's own projects are listed.
///
/// Expected: Ok(projects) without the other account's rows
#[tokio::test]
async fn lists_only_account_projects() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(Some("a@example.com")).await?;
    let other = test.account().insert_account(Some("b@example.com")).await?;
    let _ = test
        .work()
        .insert_project(account.id, None, "Album cover")
        .await?;
    let _ = test
        .work()
        .insert_project(account.id, None, "Logo sheet")
        .await?;
    let _ = test
        .work()
        .insert_project(other.id, None, "Poster series")
        .await?;

    let project_repository = ProjectRepository::new(&test.db);
    let result = project_repository.find_by_account(account.id).await;

    assert!(result.is_ok());
    let projects = result.unwrap();
    assert_eq!(projects.len(), 2);
    assert!(projects.iter().all(|p| p.account_id == account.id));

    Ok(())
}

/// Tests listing projects for an account that has none.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_when_none() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(None).await?;

    let project_repository = ProjectRepository::new(&test.db);
    let projects = project_repository.find_by_account(account.id).await?;

    assert!(projects.is_empty());

    Ok(())
}
