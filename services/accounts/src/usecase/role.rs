use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::RoleRepository;
use crate::domain::types::{Role, Status, User};
use crate::error::AccountsServiceError;

// ── CreateRole ───────────────────────────────────────────────────────────────

pub struct CreateRoleUseCase<R: RoleRepository> {
    pub roles: R,
}

impl<R: RoleRepository> CreateRoleUseCase<R> {
    pub async fn execute(&self, role_name: String) -> Result<Role, AccountsServiceError> {
        if self.roles.exists_by_name(&role_name).await? {
            return Err(AccountsServiceError::RoleAlreadyExists);
        }
        let now = Utc::now();
        let role = Role {
            id: Uuid::now_v7(),
            role_name,
            status: Status::Active,
            created_at: now,
            updated_at: now,
        };
        self.roles.create(&role).await?;
        tracing::info!(role = %role.role_name, "role created");
        Ok(role)
    }
}

// ── UpdateRole ───────────────────────────────────────────────────────────────

pub struct UpdateRoleUseCase<R: RoleRepository> {
    pub roles: R,
}

impl<R: RoleRepository> UpdateRoleUseCase<R> {
    /// Renames only when a new name is provided and not already taken;
    /// otherwise the role comes back unchanged (not an error).
    pub async fn execute(
        &self,
        role_id: Uuid,
        new_name: Option<String>,
    ) -> Result<Role, AccountsServiceError> {
        let role = self
            .roles
            .find_by_id(role_id)
            .await?
            .ok_or(AccountsServiceError::RoleNotFound)?;

        if let Some(name) = new_name {
            if !self.roles.exists_by_name(&name).await? {
                return self.roles.rename(role_id, &name).await;
            }
        }
        Ok(role)
    }
}

// ── DeleteRole / SoftDeleteRole ──────────────────────────────────────────────

pub struct DeleteRoleUseCase<R: RoleRepository> {
    pub roles: R,
}

impl<R: RoleRepository> DeleteRoleUseCase<R> {
    pub async fn execute(&self, role_id: Uuid) -> Result<(), AccountsServiceError> {
        if self.roles.find_by_id(role_id).await?.is_none() {
            return Err(AccountsServiceError::RoleNotFound);
        }
        self.roles.delete(role_id).await
    }
}

pub struct SoftDeleteRoleUseCase<R: RoleRepository> {
    pub roles: R,
}

impl<R: RoleRepository> SoftDeleteRoleUseCase<R> {
    /// Marks the role deleted without removing the row.
    pub async fn execute(&self, role_id: Uuid) -> Result<(), AccountsServiceError> {
        if self.roles.find_by_id(role_id).await?.is_none() {
            return Err(AccountsServiceError::RoleNotFound);
        }
        self.roles.set_status(role_id, Status::Deleted).await
    }
}

// ── ListRoles / UsersByRole ──────────────────────────────────────────────────

pub struct ListRolesUseCase<R: RoleRepository> {
    pub roles: R,
}

impl<R: RoleRepository> ListRolesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Role>, AccountsServiceError> {
        self.roles.list_all().await
    }
}

pub struct UsersByRoleUseCase<R: RoleRepository> {
    pub roles: R,
}

impl<R: RoleRepository> UsersByRoleUseCase<R> {
    pub async fn execute(&self, role_name: &str) -> Result<Vec<User>, AccountsServiceError> {
        let role = self
            .roles
            .find_by_name(role_name)
            .await?
            .ok_or(AccountsServiceError::RoleNotFound)?;
        self.roles.users_with_role(role.id).await
    }
}
