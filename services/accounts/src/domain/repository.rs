#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{
    ActivityLog, ActivityType, Blocking, Contact, NewUser, ProfilePatch, Role, Status, User,
};
use crate::error::AccountsServiceError;

/// Repository for user accounts.
///
/// Existence checks are scoped to non-deleted rows so a soft-deleted
/// account does not hold its login or email hostage.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccountsServiceError>;
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, AccountsServiceError>;
    async fn exists_by_login(&self, login: &str) -> Result<bool, AccountsServiceError>;
    async fn exists_by_email(&self, email: &str) -> Result<bool, AccountsServiceError>;

    /// Insert the user row and its default-role join row in one transaction.
    async fn create(&self, user: &NewUser, role_id: Uuid) -> Result<User, AccountsServiceError>;

    async fn list_all(&self) -> Result<Vec<User>, AccountsServiceError>;

    /// Apply the patch fields that are `Some`. Bumps `updated_at`.
    async fn update_profile(
        &self,
        id: Uuid,
        patch: &ProfilePatch,
    ) -> Result<User, AccountsServiceError>;

    async fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), AccountsServiceError>;

    async fn set_status(&self, id: Uuid, status: Status) -> Result<(), AccountsServiceError>;

    /// Hard delete. Association rows go with the cascade.
    async fn delete(&self, id: Uuid) -> Result<(), AccountsServiceError>;

    async fn roles_of(&self, id: Uuid) -> Result<Vec<Role>, AccountsServiceError>;
}

/// Repository for roles.
pub trait RoleRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Role>, AccountsServiceError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, AccountsServiceError>;
    async fn exists_by_name(&self, name: &str) -> Result<bool, AccountsServiceError>;
    async fn create(&self, role: &Role) -> Result<(), AccountsServiceError>;
    async fn rename(&self, id: Uuid, name: &str) -> Result<Role, AccountsServiceError>;
    async fn set_status(&self, id: Uuid, status: Status) -> Result<(), AccountsServiceError>;
    async fn delete(&self, id: Uuid) -> Result<(), AccountsServiceError>;
    async fn list_all(&self) -> Result<Vec<Role>, AccountsServiceError>;
    async fn users_with_role(&self, role_id: Uuid) -> Result<Vec<User>, AccountsServiceError>;
}

/// Repository for contact edges.
pub trait ContactRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, AccountsServiceError>;
    async fn find_by_pair(
        &self,
        user_id: Uuid,
        contact_user_id: Uuid,
    ) -> Result<Option<Contact>, AccountsServiceError>;
    async fn exists_pair(
        &self,
        user_id: Uuid,
        contact_user_id: Uuid,
    ) -> Result<bool, AccountsServiceError>;
    async fn create(&self, contact: &Contact) -> Result<(), AccountsServiceError>;
    async fn delete_by_id(&self, id: Uuid) -> Result<(), AccountsServiceError>;
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Contact>, AccountsServiceError>;
}

/// Repository for blocking edges.
pub trait BlockingRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blocking>, AccountsServiceError>;
    async fn find_by_pair(
        &self,
        user_id: Uuid,
        blocked_user_id: Uuid,
    ) -> Result<Option<Blocking>, AccountsServiceError>;
    async fn exists_pair(
        &self,
        user_id: Uuid,
        blocked_user_id: Uuid,
    ) -> Result<bool, AccountsServiceError>;
    async fn create(&self, blocking: &Blocking) -> Result<(), AccountsServiceError>;
    async fn delete_by_id(&self, id: Uuid) -> Result<(), AccountsServiceError>;
    async fn list_initiated_by(&self, user_id: Uuid)
    -> Result<Vec<Blocking>, AccountsServiceError>;
    async fn list_received_by(&self, user_id: Uuid)
    -> Result<Vec<Blocking>, AccountsServiceError>;
}

/// Repository for activity log entries.
pub trait ActivityLogRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ActivityLog>, AccountsServiceError>;
    async fn create(
        &self,
        user_id: Uuid,
        activity_type: ActivityType,
    ) -> Result<ActivityLog, AccountsServiceError>;
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, AccountsServiceError>;
    async fn list_for_user(&self, user_id: Uuid)
    -> Result<Vec<ActivityLog>, AccountsServiceError>;
}

/// Port for the external auth service.
pub trait TokenValidator: Send + Sync {
    /// `true` only when the auth service confirms the token. Transport
    /// errors and non-success responses come back as `false` (fail closed).
    async fn validate_token(&self, token: &str) -> bool;

    /// Asks the auth service whether the access token is past its expiry.
    async fn is_access_token_expired(&self, token: &str) -> Result<bool, AccountsServiceError>;
}
