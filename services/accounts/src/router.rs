use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, patch, post, put},
};
use axum_extra::TypedHeader;
use axum_extra::headers::{Authorization, authorization::Bearer};
use tower_http::trace::TraceLayer;

use crate::domain::repository::TokenValidator as _;
use crate::error::AccountsServiceError;
use crate::handlers::{
    activity_log::{create_activity_log, delete_activity_log, get_activity_log, list_activity},
    blocking::{create_blocking, delete_blocking, list_blockings},
    contact::{create_contact, delete_contact, list_contacts},
    role::{create_role, delete_role, list_roles, soft_delete_role, update_role, users_by_role},
    user::{
        delete_user, get_profile, get_user_by_login, list_users, register, soft_delete_user,
        update_password, update_profile,
    },
};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Handler for `GET /healthz` — liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` — readiness check.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}

/// Bearer-token guard delegating to the auth service. Fails closed: a
/// missing header or a negative/unreachable auth service all yield 403.
pub async fn require_token(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    request: Request,
    next: Next,
) -> Result<Response, AccountsServiceError> {
    let Some(TypedHeader(bearer)) = bearer else {
        return Err(AccountsServiceError::AuthFailed);
    };
    if !state.token_validator.validate_token(bearer.token()).await {
        return Err(AccountsServiceError::AuthFailed);
    }
    Ok(next.run(request).await)
}

pub fn build_router(state: AppState) -> Router {
    // Registration and the auth-service credential lookup stay open; the
    // lookup is what the auth service calls before it can issue a token.
    let open = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/users/register", post(register))
        .route("/users/by-login/{login}", get(get_user_by_login));

    let guarded = Router::new()
        // Users
        .route("/users", get(list_users))
        .route("/users/{id}/profile", get(get_profile))
        .route("/users/{id}", patch(update_profile))
        .route("/users/{id}/password", put(update_password))
        .route("/users/{id}", delete(delete_user))
        .route("/users/{id}/soft", delete(soft_delete_user))
        // Contacts
        .route("/users/{id}/contacts", get(list_contacts))
        .route("/users/{id}/contacts", post(create_contact))
        .route("/users/{id}/contacts/{contact_user_id}", delete(delete_contact))
        // Blockings
        .route("/users/{id}/blockings", get(list_blockings))
        .route("/users/{id}/blockings", post(create_blocking))
        .route("/users/{id}/blockings/{blocked_user_id}", delete(delete_blocking))
        // Roles
        .route("/roles", get(list_roles))
        .route("/roles", post(create_role))
        .route("/roles/{id}", patch(update_role))
        .route("/roles/{id}", delete(delete_role))
        .route("/roles/{id}/soft", delete(soft_delete_role))
        .route("/roles/by-name/{name}/users", get(users_by_role))
        // Activity logs
        .route("/users/{id}/activity", get(list_activity))
        .route("/users/{id}/activity", post(create_activity_log))
        .route("/activity/{id}", get(get_activity_log))
        .route("/activity/{id}", delete(delete_activity_log))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_token,
        ));

    open.merge(guarded)
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
