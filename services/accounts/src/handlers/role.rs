use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::Role;
use crate::error::AccountsServiceError;
use crate::handlers::user::UserProfileResponse;
use crate::state::AppState;
use crate::usecase::role::{
    CreateRoleUseCase, DeleteRoleUseCase, ListRolesUseCase, SoftDeleteRoleUseCase,
    UpdateRoleUseCase, UsersByRoleUseCase,
};

#[derive(Serialize)]
pub struct RoleResponse {
    pub id: String,
    pub role_name: String,
    pub status: &'static str,
    #[serde(serialize_with = "crate::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "crate::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id.to_string(),
            role_name: role.role_name,
            status: role.status.as_str(),
            created_at: role.created_at,
            updated_at: role.updated_at,
        }
    }
}

// ── POST /roles ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateRoleRequest {
    pub role_name: String,
}

pub async fn create_role(
    State(state): State<AppState>,
    Json(body): Json<CreateRoleRequest>,
) -> Result<(StatusCode, Json<RoleResponse>), AccountsServiceError> {
    let usecase = CreateRoleUseCase {
        roles: state.role_repo(),
    };
    let role = usecase.execute(body.role_name).await?;
    Ok((StatusCode::CREATED, Json(role.into())))
}

// ── GET /roles ───────────────────────────────────────────────────────────────

pub async fn list_roles(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoleResponse>>, AccountsServiceError> {
    let usecase = ListRolesUseCase {
        roles: state.role_repo(),
    };
    let roles = usecase.execute().await?;
    Ok(Json(roles.into_iter().map(Into::into).collect()))
}

// ── PATCH /roles/{id} ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateRoleRequest {
    pub role_name: Option<String>,
}

pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateRoleRequest>,
) -> Result<Json<RoleResponse>, AccountsServiceError> {
    let usecase = UpdateRoleUseCase {
        roles: state.role_repo(),
    };
    let role = usecase.execute(id, body.role_name).await?;
    Ok(Json(role.into()))
}

// ── DELETE /roles/{id} and /roles/{id}/soft ──────────────────────────────────

pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AccountsServiceError> {
    let usecase = DeleteRoleUseCase {
        roles: state.role_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn soft_delete_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AccountsServiceError> {
    let usecase = SoftDeleteRoleUseCase {
        roles: state.role_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /roles/by-name/{name}/users ──────────────────────────────────────────

pub async fn users_by_role(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<UserProfileResponse>>, AccountsServiceError> {
    let usecase = UsersByRoleUseCase {
        roles: state.role_repo(),
    };
    let users = usecase.execute(&name).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}
