use anyhow::anyhow;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use uuid::Uuid;

use crate::domain::repository::{RoleRepository, UserRepository};
use crate::domain::types::{NewUser, ProfilePatch, Role, Status, User};
use crate::domain::validation::{
    EmailValidator, FieldValidator, LoginValidator, PersonNameValidator, validate_registration,
};
use crate::error::AccountsServiceError;

/// Role attached to every freshly registered user.
pub const DEFAULT_ROLE: &str = "ROLE_USER";

/// Salted argon2 hash in PHC string format.
pub fn hash_password(password: &str) -> Result<String, AccountsServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AccountsServiceError::Internal(anyhow!("password hashing failed: {e}")))
}

/// Verify a candidate password against a stored PHC hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AccountsServiceError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AccountsServiceError::Internal(anyhow!("stored hash is malformed: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

// ── RegisterUser ─────────────────────────────────────────────────────────────

pub struct RegisterUserInput {
    pub login: String,
    pub password: String,
    pub confirm_password: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

/// Public-safe result of a registration: the stored user plus role names.
#[derive(Debug)]
pub struct RegisteredUser {
    pub user: User,
    pub roles: Vec<String>,
}

pub struct RegisterUserUseCase<U: UserRepository, R: RoleRepository> {
    pub users: U,
    pub roles: R,
}

impl<U: UserRepository, R: RoleRepository> RegisterUserUseCase<U, R> {
    /// Validation, uniqueness and confirmation checks run before any write;
    /// every failure is wrapped as `Registration` with the cause preserved.
    pub async fn execute(
        &self,
        input: RegisterUserInput,
    ) -> Result<RegisteredUser, AccountsServiceError> {
        let field_errors = validate_registration(
            &input.login,
            &input.firstname,
            &input.lastname,
            &input.email,
        );
        if !field_errors.is_empty() {
            return Err(AccountsServiceError::registration(
                AccountsServiceError::Validation(field_errors),
            ));
        }
        if self.users.exists_by_login(&input.login).await? {
            tracing::warn!(login = %input.login, "registration rejected: login taken");
            return Err(AccountsServiceError::registration(
                AccountsServiceError::LoginAlreadyExists,
            ));
        }
        if self.users.exists_by_email(&input.email).await? {
            return Err(AccountsServiceError::registration(
                AccountsServiceError::EmailAlreadyExists,
            ));
        }
        if input.password != input.confirm_password {
            return Err(AccountsServiceError::registration(
                AccountsServiceError::PasswordsNotMatch("passwords do not match"),
            ));
        }

        let password_hash = hash_password(&input.password)?;
        // The seed migration guarantees this role; its absence is a broken
        // deployment, not a client error.
        let default_role = self.roles.find_by_name(DEFAULT_ROLE).await?.ok_or_else(|| {
            AccountsServiceError::Internal(anyhow!("default role {DEFAULT_ROLE} is not seeded"))
        })?;

        let new_user = NewUser {
            id: Uuid::now_v7(),
            login: input.login,
            password_hash,
            firstname: input.firstname,
            lastname: input.lastname,
            email: input.email,
        };
        let user = self.users.create(&new_user, default_role.id).await?;
        tracing::info!(login = %user.login, "user registered");

        Ok(RegisteredUser {
            user,
            roles: vec![default_role.role_name],
        })
    }
}

// ── GetUser / GetUserByLogin / ListUsers ─────────────────────────────────────

pub struct GetUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> GetUserUseCase<U> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, AccountsServiceError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(AccountsServiceError::UserNotFound)
    }
}

/// Auth-service lookup: the user together with its role names. The caller
/// is trusted with the password hash (service-to-service contract).
pub struct GetUserByLoginUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> GetUserByLoginUseCase<U> {
    pub async fn execute(&self, login: &str) -> Result<(User, Vec<Role>), AccountsServiceError> {
        let user = self
            .users
            .find_by_login(login)
            .await?
            .ok_or(AccountsServiceError::UserNotFound)?;
        let roles = self.users.roles_of(user.id).await?;
        Ok((user, roles))
    }
}

pub struct ListUsersUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> ListUsersUseCase<U> {
    pub async fn execute(&self) -> Result<Vec<User>, AccountsServiceError> {
        self.users.list_all().await
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> UpdateProfileUseCase<U> {
    /// Applies only fields that are provided and differ from the current
    /// value. A uniqueness collision on login or email drops that field
    /// silently; the remaining fields still apply.
    pub async fn execute(
        &self,
        user_id: Uuid,
        patch: ProfilePatch,
    ) -> Result<User, AccountsServiceError> {
        let current = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AccountsServiceError::UserNotFound)?;

        let field_errors = Self::validate_patch(&patch);
        if !field_errors.is_empty() {
            return Err(AccountsServiceError::Validation(field_errors));
        }

        let mut applied = ProfilePatch::default();
        if let Some(login) = patch.login {
            if login != current.login && !self.users.exists_by_login(&login).await? {
                applied.login = Some(login);
            }
        }
        if let Some(firstname) = patch.firstname {
            if firstname != current.firstname {
                applied.firstname = Some(firstname);
            }
        }
        if let Some(lastname) = patch.lastname {
            if lastname != current.lastname {
                applied.lastname = Some(lastname);
            }
        }
        if let Some(email) = patch.email {
            if email != current.email && !self.users.exists_by_email(&email).await? {
                applied.email = Some(email);
            }
        }

        self.users.update_profile(user_id, &applied).await
    }

    fn validate_patch(patch: &ProfilePatch) -> Vec<crate::domain::validation::FieldError> {
        let mut errors = Vec::new();
        if let Some(ref login) = patch.login {
            errors.extend(LoginValidator.validate(login));
        }
        if let Some(ref firstname) = patch.firstname {
            errors.extend(PersonNameValidator { field: "firstname" }.validate(firstname));
        }
        if let Some(ref lastname) = patch.lastname {
            errors.extend(PersonNameValidator { field: "lastname" }.validate(lastname));
        }
        if let Some(ref email) = patch.email {
            errors.extend(EmailValidator.validate(email));
        }
        errors
    }
}

// ── UpdatePassword ───────────────────────────────────────────────────────────

pub struct UpdatePasswordInput {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

pub struct UpdatePasswordUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> UpdatePasswordUseCase<U> {
    /// Checks run in order: user exists, current password verifies, new
    /// matches its confirmation, new differs from current. The stored hash
    /// is untouched unless every check passes.
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: UpdatePasswordInput,
    ) -> Result<(), AccountsServiceError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AccountsServiceError::UserNotFound)?;

        if !verify_password(&input.current_password, &user.password_hash)? {
            return Err(AccountsServiceError::PasswordsNotMatch(
                "incorrect current password",
            ));
        }
        if input.new_password != input.confirm_password {
            return Err(AccountsServiceError::PasswordsNotMatch(
                "password confirmation mismatch",
            ));
        }
        if verify_password(&input.new_password, &user.password_hash)? {
            return Err(AccountsServiceError::PasswordsNotMatch(
                "new password must differ from the current one",
            ));
        }

        let new_hash = hash_password(&input.new_password)?;
        self.users.update_password_hash(user_id, &new_hash).await
    }
}

// ── DeleteUser / SoftDeleteUser ──────────────────────────────────────────────

pub struct DeleteUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> DeleteUserUseCase<U> {
    pub async fn execute(&self, user_id: Uuid) -> Result<(), AccountsServiceError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AccountsServiceError::UserNotFound);
        }
        self.users.delete(user_id).await
    }
}

pub struct SoftDeleteUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> SoftDeleteUserUseCase<U> {
    /// Marks the row deleted; it stays queryable by id and login.
    pub async fn execute(&self, user_id: Uuid) -> Result<(), AccountsServiceError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AccountsServiceError::UserNotFound);
        }
        self.users.set_status(user_id, Status::Deleted).await
    }
}
