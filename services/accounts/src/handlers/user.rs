use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{ProfilePatch, Role, User};
use crate::error::AccountsServiceError;
use crate::state::AppState;
use crate::usecase::user::{
    DeleteUserUseCase, GetUserByLoginUseCase, GetUserUseCase, ListUsersUseCase,
    RegisterUserUseCase, SoftDeleteUserUseCase, UpdatePasswordInput, UpdatePasswordUseCase,
    UpdateProfileUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

/// Public projection of a user. Never carries the password hash.
#[derive(Serialize)]
pub struct UserProfileResponse {
    pub id: String,
    pub login: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub status: &'static str,
    #[serde(serialize_with = "crate::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "crate::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            login: user.login,
            firstname: user.firstname,
            lastname: user.lastname,
            email: user.email,
            status: user.status.as_str(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct RegistrationResponse {
    pub id: String,
    pub login: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub roles: Vec<String>,
    #[serde(serialize_with = "crate::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Credential projection for the auth service. Internal contract only;
/// the route is deliberately outside the token guard.
#[derive(Serialize)]
pub struct AuthLookupResponse {
    pub id: String,
    pub login: String,
    pub password_hash: String,
    pub status: &'static str,
    pub roles: Vec<String>,
}

// ── POST /users/register ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub login: String,
    pub password: String,
    pub confirm_password: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegistrationResponse>), AccountsServiceError> {
    let usecase = RegisterUserUseCase {
        users: state.user_repo(),
        roles: state.role_repo(),
    };
    let registered = usecase
        .execute(crate::usecase::user::RegisterUserInput {
            login: body.login,
            password: body.password,
            confirm_password: body.confirm_password,
            firstname: body.firstname,
            lastname: body.lastname,
            email: body.email,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse {
            id: registered.user.id.to_string(),
            login: registered.user.login,
            firstname: registered.user.firstname,
            lastname: registered.user.lastname,
            email: registered.user.email,
            roles: registered.roles,
            created_at: registered.user.created_at,
        }),
    ))
}

// ── GET /users/by-login/{login} ──────────────────────────────────────────────

pub async fn get_user_by_login(
    State(state): State<AppState>,
    Path(login): Path<String>,
) -> Result<Json<AuthLookupResponse>, AccountsServiceError> {
    let usecase = GetUserByLoginUseCase {
        users: state.user_repo(),
    };
    let (user, roles) = usecase.execute(&login).await?;
    Ok(Json(AuthLookupResponse {
        id: user.id.to_string(),
        login: user.login,
        password_hash: user.password_hash,
        status: user.status.as_str(),
        roles: roles.into_iter().map(|r: Role| r.role_name).collect(),
    }))
}

// ── GET /users ───────────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserProfileResponse>>, AccountsServiceError> {
    let usecase = ListUsersUseCase {
        users: state.user_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

// ── GET /users/{id}/profile ──────────────────────────────────────────────────

pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserProfileResponse>, AccountsServiceError> {
    let usecase = GetUserUseCase {
        users: state.user_repo(),
    };
    let user = usecase.execute(id).await?;
    Ok(Json(user.into()))
}

// ── PATCH /users/{id} ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub login: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
}

pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfileResponse>, AccountsServiceError> {
    let usecase = UpdateProfileUseCase {
        users: state.user_repo(),
    };
    let user = usecase
        .execute(
            id,
            ProfilePatch {
                login: body.login,
                firstname: body.firstname,
                lastname: body.lastname,
                email: body.email,
            },
        )
        .await?;
    Ok(Json(user.into()))
}

// ── PUT /users/{id}/password ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdatePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

pub async fn update_password(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdatePasswordRequest>,
) -> Result<StatusCode, AccountsServiceError> {
    let usecase = UpdatePasswordUseCase {
        users: state.user_repo(),
    };
    usecase
        .execute(
            id,
            UpdatePasswordInput {
                current_password: body.current_password,
                new_password: body.new_password,
                confirm_password: body.confirm_password,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /users/{id} and /users/{id}/soft ──────────────────────────────────

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AccountsServiceError> {
    let usecase = DeleteUserUseCase {
        users: state.user_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn soft_delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AccountsServiceError> {
    let usecase = SoftDeleteUserUseCase {
        users: state.user_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
