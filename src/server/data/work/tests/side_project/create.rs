//! Tests for SideProjectRepository::create method.

use super::*;

/// Tests creating a side project.
///
/// Expected: Ok(side_project) with a zeroed work accumulator
#[tokio::test]
async fn creates_side_project() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(None).await?;

    let side_project_repository = SideProjectRepository::new(&test.db);
    let result = side_project_repository
        .create(NewSideProject {
            account_id: account.id,
            title: "Portfolio site".to_string(),
            description: Some("Sketch gallery rebuild".to_string()),
            status: "IN_PROGRESS".to_string(),
            priority: "LOW".to_string(),
        })
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let side_project = result.unwrap();
    assert_eq!(side_project.account_id, account.id);
    assert_eq!(side_project.title, "Portfolio site");
    assert_eq!(side_project.worked_seconds, 0);

    Ok(())
}

/// Tests listing side projects for the owning account only.
///
/// Expected: Ok(side_projects) scoped to the account
#[tokio::test]
async fn lists_only_account_side_projects() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(Some("a@example.com")).await?;
    let other = test.account().insert_account(Some("b@example.com")).await?;
    let _ = test
        .work()
        .insert_side_project(account.id, "Portfolio site")
        .await?;
    let _ = test.work().insert_side_project(other.id, "Zine").await?;

    let side_project_repository = SideProjectRepository::new(&test.db);
    let side_projects = side_project_repository.find_by_account(account.id).await?;

    assert_eq!(side_projects.len(), 1);
    assert_eq!(side_projects[0].title, "Portfolio site");

    Ok(())
}
