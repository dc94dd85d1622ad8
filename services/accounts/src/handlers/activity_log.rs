use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{ActivityLog, ActivityType};
use crate::error::AccountsServiceError;
use crate::state::AppState;
use crate::usecase::activity_log::{
    CreateActivityLogUseCase, DeleteActivityLogUseCase, GetActivityLogUseCase,
    ListActivityLogsUseCase,
};

#[derive(Serialize)]
pub struct ActivityLogResponse {
    pub id: String,
    pub user_id: String,
    pub activity_type: &'static str,
    #[serde(serialize_with = "crate::serde::to_rfc3339_ms")]
    pub active_at: chrono::DateTime<chrono::Utc>,
}

impl From<ActivityLog> for ActivityLogResponse {
    fn from(log: ActivityLog) -> Self {
        Self {
            id: log.id.to_string(),
            user_id: log.user_id.to_string(),
            activity_type: log.activity_type.as_str(),
            active_at: log.active_at,
        }
    }
}

// ── POST /users/{id}/activity ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateActivityLogRequest {
    pub activity_type: String,
}

pub async fn create_activity_log(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<CreateActivityLogRequest>,
) -> Result<(StatusCode, Json<ActivityLogResponse>), AccountsServiceError> {
    let activity_type = ActivityType::from_snake_case(&body.activity_type)
        .ok_or(AccountsServiceError::ActivityLogMissingData)?;
    let usecase = CreateActivityLogUseCase {
        activity: state.activity_repo(),
        users: state.user_repo(),
    };
    let log = usecase.execute(user_id, activity_type).await?;
    Ok((StatusCode::CREATED, Json(log.into())))
}

// ── GET /users/{id}/activity ─────────────────────────────────────────────────

pub async fn list_activity(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<ActivityLogResponse>>, AccountsServiceError> {
    let usecase = ListActivityLogsUseCase {
        activity: state.activity_repo(),
        users: state.user_repo(),
    };
    let logs = usecase.execute(user_id).await?;
    Ok(Json(logs.into_iter().map(Into::into).collect()))
}

// ── GET / DELETE /activity/{id} ──────────────────────────────────────────────

pub async fn get_activity_log(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ActivityLogResponse>, AccountsServiceError> {
    let usecase = GetActivityLogUseCase {
        activity: state.activity_repo(),
    };
    let log = usecase.execute(id).await?;
    Ok(Json(log.into()))
}

pub async fn delete_activity_log(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AccountsServiceError> {
    let usecase = DeleteActivityLogUseCase {
        activity: state.activity_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
