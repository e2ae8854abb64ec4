use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use tally::{
    model::{
        stats::StatsDto,
        timer::{ActiveTimerDto, TimerDto},
        work::{CreateProjectDto, ProjectDto},
    },
    server::{
        controller::{
            stats::get_stats,
            timer::{active, stop},
            work::create_project,
        },
        model::session::account::SessionAccountId,
    },
};
use tally_test_utils::prelude::*;

use crate::util::TestSetupExt;

async fn body_of<T: serde::de::DeserializeOwned>(resp: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
/// Expect a tracked work session to show up in the project's accumulated
/// time and in the account's stats
async fn tracked_time_lands_in_stats() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let account = test.account().insert_account(Some("casey@example.com")).await?;

    SessionAccountId::insert(&test.session, account.id)
        .await
        .unwrap();

    let result = create_project(
        State(test.state()),
        test.session.clone(),
        Json(CreateProjectDto {
            title: "Logo".to_string(),
            description: None,
            client_id: None,
            client_name: Some("Moonlight Press".to_string()),
            priority: None,
            due_date: None,
        }),
    )
    .await;
    assert!(result.is_ok());
    let project: ProjectDto = body_of(result.unwrap().into_response()).await;

    // A session that has been running for a couple of minutes
    let started_at = Utc::now().naive_utc() - chrono::Duration::seconds(125);
    test.work()
        .insert_active_timer_started_at(account.id, Some(project.id), started_at)
        .await?;

    let result = active(State(test.state()), test.session.clone()).await;
    assert!(result.is_ok());
    let running: Option<ActiveTimerDto> = body_of(result.unwrap().into_response()).await;
    assert!(running.unwrap().elapsed_seconds >= 125);

    let result = stop(State(test.state()), test.session.clone()).await;
    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let stopped: TimerDto = body_of(resp).await;
    assert!(!stopped.is_active);
    assert!(stopped.duration_seconds.unwrap() >= 125);

    let result = get_stats(State(test.state()), test.session.clone()).await;
    assert!(result.is_ok());
    let stats: StatsDto = body_of(result.unwrap().into_response()).await;
    assert_eq!(stats.projects.total, 1);
    assert_eq!(stats.clients.total, 1);
    assert!(stats.worked_seconds.projects >= 125);
    assert!(stats.worked_seconds.total >= 125);

    Ok(())
}
