use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::Contact;
use crate::error::AccountsServiceError;
use crate::state::AppState;
use crate::usecase::contact::{
    CreateContactUseCase, DeleteContactUseCase, ListContactsUseCase,
};

#[derive(Serialize)]
pub struct ContactResponse {
    pub id: String,
    pub user_id: String,
    pub contact_user_id: String,
    #[serde(serialize_with = "crate::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id.to_string(),
            user_id: contact.user_id.to_string(),
            contact_user_id: contact.contact_user_id.to_string(),
            created_at: contact.created_at,
        }
    }
}

// ── POST /users/{id}/contacts ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateContactRequest {
    pub contact_user_id: Uuid,
}

pub async fn create_contact(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<CreateContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>), AccountsServiceError> {
    let usecase = CreateContactUseCase {
        contacts: state.contact_repo(),
        users: state.user_repo(),
        activity: state.activity_repo(),
    };
    let contact = usecase.execute(user_id, body.contact_user_id).await?;
    Ok((StatusCode::CREATED, Json(contact.into())))
}

// ── DELETE /users/{id}/contacts/{contact_user_id} ────────────────────────────

pub async fn delete_contact(
    State(state): State<AppState>,
    Path((user_id, contact_user_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AccountsServiceError> {
    let usecase = DeleteContactUseCase {
        contacts: state.contact_repo(),
        activity: state.activity_repo(),
    };
    usecase.by_users(user_id, contact_user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /users/{id}/contacts ─────────────────────────────────────────────────

pub async fn list_contacts(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<ContactResponse>>, AccountsServiceError> {
    let usecase = ListContactsUseCase {
        contacts: state.contact_repo(),
        users: state.user_repo(),
    };
    let contacts = usecase.execute(user_id).await?;
    Ok(Json(contacts.into_iter().map(Into::into).collect()))
}
