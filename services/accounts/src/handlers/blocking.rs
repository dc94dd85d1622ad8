use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{Blocking, BlockingDirection};
use crate::domain::validation::FieldError;
use crate::error::AccountsServiceError;
use crate::state::AppState;
use crate::usecase::blocking::{
    CreateBlockingUseCase, DeleteBlockingUseCase, ListBlockingsUseCase,
};

#[derive(Serialize)]
pub struct BlockingResponse {
    pub id: String,
    pub user_id: String,
    pub blocked_user_id: String,
    #[serde(serialize_with = "crate::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Blocking> for BlockingResponse {
    fn from(blocking: Blocking) -> Self {
        Self {
            id: blocking.id.to_string(),
            user_id: blocking.user_id.to_string(),
            blocked_user_id: blocking.blocked_user_id.to_string(),
            created_at: blocking.created_at,
        }
    }
}

// ── POST /users/{id}/blockings ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateBlockingRequest {
    pub blocked_user_id: Uuid,
}

pub async fn create_blocking(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<CreateBlockingRequest>,
) -> Result<(StatusCode, Json<BlockingResponse>), AccountsServiceError> {
    let usecase = CreateBlockingUseCase {
        blockings: state.blocking_repo(),
        users: state.user_repo(),
    };
    let blocking = usecase.execute(user_id, body.blocked_user_id).await?;
    Ok((StatusCode::CREATED, Json(blocking.into())))
}

// ── DELETE /users/{id}/blockings/{blocked_user_id} ───────────────────────────

pub async fn delete_blocking(
    State(state): State<AppState>,
    Path((user_id, blocked_user_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AccountsServiceError> {
    let usecase = DeleteBlockingUseCase {
        blockings: state.blocking_repo(),
    };
    usecase.by_users(user_id, blocked_user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /users/{id}/blockings ────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct BlockingListQuery {
    pub direction: Option<String>,
}

pub async fn list_blockings(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<BlockingListQuery>,
) -> Result<Json<Vec<BlockingResponse>>, AccountsServiceError> {
    let direction = match query.direction.as_deref() {
        None => BlockingDirection::default(),
        Some(raw) => BlockingDirection::from_kebab_case(raw).ok_or_else(|| {
            AccountsServiceError::Validation(vec![FieldError {
                field: "direction",
                message: "expected 'initiated' or 'received'".into(),
            }])
        })?,
    };
    let usecase = ListBlockingsUseCase {
        blockings: state.blocking_repo(),
        users: state.user_repo(),
    };
    let blockings = usecase.execute(user_id, direction).await?;
    Ok(Json(blockings.into_iter().map(Into::into).collect()))
}
