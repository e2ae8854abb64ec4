use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TimerDto {
    pub id: i32,
    pub project_id: Option<i32>,
    pub started_at: NaiveDateTime,
    pub ended_at: Option<NaiveDateTime>,
    pub duration_seconds: Option<i64>,
    pub is_active: bool,
}

impl From<entity::timer::Model> for TimerDto {
    fn from(timer: entity::timer::Model) -> Self {
        Self {
            id: timer.id,
            project_id: timer.project_id,
            started_at: timer.started_at,
            ended_at: timer.ended_at,
            duration_seconds: timer.duration_seconds,
            is_active: timer.is_active,
        }
    }
}

/// An active timer together with its elapsed time, recomputed at read time.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ActiveTimerDto {
    #[serde(flatten)]
    pub timer: TimerDto,
    pub elapsed_seconds: i64,
}

/// Request body for starting a timer.
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StartTimerDto {
    /// Project the tracked time should be credited to
    pub project_id: Option<i32>,
}
