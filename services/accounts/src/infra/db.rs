use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use parley_accounts_schema::{activity_logs, block_list, contacts, roles, status, user_roles, users};

use crate::domain::repository::{
    ActivityLogRepository, BlockingRepository, ContactRepository, RoleRepository, UserRepository,
};
use crate::domain::types::{
    ActivityLog, ActivityType, Blocking, Contact, NewUser, ProfilePatch, Role, Status, User,
};
use crate::error::AccountsServiceError;

// ── Enum mapping ─────────────────────────────────────────────────────────────

fn status_to_db(status: Status) -> status::Status {
    match status {
        Status::Active => status::Status::Active,
        Status::NotActive => status::Status::NotActive,
        Status::Deleted => status::Status::Deleted,
    }
}

fn status_from_db(status: status::Status) -> Status {
    match status {
        status::Status::Active => Status::Active,
        status::Status::NotActive => Status::NotActive,
        status::Status::Deleted => Status::Deleted,
    }
}

fn activity_type_to_db(ty: ActivityType) -> activity_logs::ActivityType {
    match ty {
        ActivityType::Login => activity_logs::ActivityType::Login,
        ActivityType::Logout => activity_logs::ActivityType::Logout,
        ActivityType::AccountCreation => activity_logs::ActivityType::AccountCreation,
        ActivityType::ProfileUpdate => activity_logs::ActivityType::ProfileUpdate,
        ActivityType::MessageSent => activity_logs::ActivityType::MessageSent,
        ActivityType::MessageReceived => activity_logs::ActivityType::MessageReceived,
        ActivityType::MessageDeletion => activity_logs::ActivityType::MessageDeletion,
        ActivityType::ContactCreation => activity_logs::ActivityType::ContactCreation,
        ActivityType::ContactDeletion => activity_logs::ActivityType::ContactDeletion,
        ActivityType::SettingsUpdate => activity_logs::ActivityType::SettingsUpdate,
    }
}

fn activity_type_from_db(ty: activity_logs::ActivityType) -> ActivityType {
    match ty {
        activity_logs::ActivityType::Login => ActivityType::Login,
        activity_logs::ActivityType::Logout => ActivityType::Logout,
        activity_logs::ActivityType::AccountCreation => ActivityType::AccountCreation,
        activity_logs::ActivityType::ProfileUpdate => ActivityType::ProfileUpdate,
        activity_logs::ActivityType::MessageSent => ActivityType::MessageSent,
        activity_logs::ActivityType::MessageReceived => ActivityType::MessageReceived,
        activity_logs::ActivityType::MessageDeletion => ActivityType::MessageDeletion,
        activity_logs::ActivityType::ContactCreation => ActivityType::ContactCreation,
        activity_logs::ActivityType::ContactDeletion => ActivityType::ContactDeletion,
        activity_logs::ActivityType::SettingsUpdate => ActivityType::SettingsUpdate,
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        login: model.login,
        password_hash: model.password_hash,
        firstname: model.firstname,
        lastname: model.lastname,
        email: model.email,
        status: status_from_db(model.status),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccountsServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, AccountsServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Login.eq(login))
            .one(&self.db)
            .await
            .context("find user by login")?;
        Ok(model.map(user_from_model))
    }

    async fn exists_by_login(&self, login: &str) -> Result<bool, AccountsServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Login.eq(login))
            .filter(users::Column::Status.ne(status::Status::Deleted))
            .one(&self.db)
            .await
            .context("check login existence")?;
        Ok(model.is_some())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AccountsServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .filter(users::Column::Status.ne(status::Status::Deleted))
            .one(&self.db)
            .await
            .context("check email existence")?;
        Ok(model.is_some())
    }

    async fn create(&self, user: &NewUser, role_id: Uuid) -> Result<User, AccountsServiceError> {
        let txn = self.db.begin().await.context("begin user creation")?;
        let now = Utc::now();
        let model = users::ActiveModel {
            id: Set(user.id),
            login: Set(user.login.clone()),
            password_hash: Set(user.password_hash.clone()),
            firstname: Set(user.firstname.clone()),
            lastname: Set(user.lastname.clone()),
            email: Set(user.email.clone()),
            status: Set(status::Status::Active),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .context("insert user")?;
        user_roles::ActiveModel {
            user_id: Set(user.id),
            role_id: Set(role_id),
        }
        .insert(&txn)
        .await
        .context("insert user-role association")?;
        txn.commit().await.context("commit user creation")?;
        Ok(user_from_model(model))
    }

    async fn list_all(&self) -> Result<Vec<User>, AccountsServiceError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn update_profile(
        &self,
        id: Uuid,
        patch: &ProfilePatch,
    ) -> Result<User, AccountsServiceError> {
        let mut am = users::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(ref login) = patch.login {
            am.login = Set(login.clone());
        }
        if let Some(ref firstname) = patch.firstname {
            am.firstname = Set(firstname.clone());
        }
        if let Some(ref lastname) = patch.lastname {
            am.lastname = Set(lastname.clone());
        }
        if let Some(ref email) = patch.email {
            am.email = Set(email.clone());
        }
        am.updated_at = Set(Utc::now());
        let model = am.update(&self.db).await.context("update user profile")?;
        Ok(user_from_model(model))
    }

    async fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), AccountsServiceError> {
        users::ActiveModel {
            id: Set(id),
            password_hash: Set(password_hash.to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update password hash")?;
        Ok(())
    }

    async fn set_status(&self, id: Uuid, status: Status) -> Result<(), AccountsServiceError> {
        users::ActiveModel {
            id: Set(id),
            status: Set(status_to_db(status)),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set user status")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AccountsServiceError> {
        users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(())
    }

    async fn roles_of(&self, id: Uuid) -> Result<Vec<Role>, AccountsServiceError> {
        let role_ids: Vec<Uuid> = user_roles::Entity::find()
            .filter(user_roles::Column::UserId.eq(id))
            .all(&self.db)
            .await
            .context("list user-role associations")?
            .into_iter()
            .map(|m| m.role_id)
            .collect();
        let models = roles::Entity::find()
            .filter(roles::Column::Id.is_in(role_ids))
            .all(&self.db)
            .await
            .context("list roles of user")?;
        Ok(models.into_iter().map(role_from_model).collect())
    }
}

// ── Role repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRoleRepository {
    pub db: DatabaseConnection,
}

fn role_from_model(model: roles::Model) -> Role {
    Role {
        id: model.id,
        role_name: model.role_name,
        status: status_from_db(model.status),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

impl RoleRepository for DbRoleRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Role>, AccountsServiceError> {
        let model = roles::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find role by id")?;
        Ok(model.map(role_from_model))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, AccountsServiceError> {
        let model = roles::Entity::find()
            .filter(roles::Column::RoleName.eq(name))
            .one(&self.db)
            .await
            .context("find role by name")?;
        Ok(model.map(role_from_model))
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, AccountsServiceError> {
        Ok(self.find_by_name(name).await?.is_some())
    }

    async fn create(&self, role: &Role) -> Result<(), AccountsServiceError> {
        roles::ActiveModel {
            id: Set(role.id),
            role_name: Set(role.role_name.clone()),
            status: Set(status_to_db(role.status)),
            created_at: Set(role.created_at),
            updated_at: Set(role.updated_at),
        }
        .insert(&self.db)
        .await
        .context("insert role")?;
        Ok(())
    }

    async fn rename(&self, id: Uuid, name: &str) -> Result<Role, AccountsServiceError> {
        let model = roles::ActiveModel {
            id: Set(id),
            role_name: Set(name.to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("rename role")?;
        Ok(role_from_model(model))
    }

    async fn set_status(&self, id: Uuid, status: Status) -> Result<(), AccountsServiceError> {
        roles::ActiveModel {
            id: Set(id),
            status: Set(status_to_db(status)),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set role status")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AccountsServiceError> {
        roles::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete role")?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Role>, AccountsServiceError> {
        let models = roles::Entity::find()
            .order_by_asc(roles::Column::RoleName)
            .all(&self.db)
            .await
            .context("list roles")?;
        Ok(models.into_iter().map(role_from_model).collect())
    }

    async fn users_with_role(&self, role_id: Uuid) -> Result<Vec<User>, AccountsServiceError> {
        let user_ids: Vec<Uuid> = user_roles::Entity::find()
            .filter(user_roles::Column::RoleId.eq(role_id))
            .all(&self.db)
            .await
            .context("list role-user associations")?
            .into_iter()
            .map(|m| m.user_id)
            .collect();
        let models = users::Entity::find()
            .filter(users::Column::Id.is_in(user_ids))
            .all(&self.db)
            .await
            .context("list users with role")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }
}

// ── Contact repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbContactRepository {
    pub db: DatabaseConnection,
}

fn contact_from_model(model: contacts::Model) -> Contact {
    Contact {
        id: model.id,
        user_id: model.user_id,
        contact_user_id: model.contact_user_id,
        created_at: model.created_at,
    }
}

impl ContactRepository for DbContactRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, AccountsServiceError> {
        let model = contacts::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find contact by id")?;
        Ok(model.map(contact_from_model))
    }

    async fn find_by_pair(
        &self,
        user_id: Uuid,
        contact_user_id: Uuid,
    ) -> Result<Option<Contact>, AccountsServiceError> {
        let model = contacts::Entity::find()
            .filter(contacts::Column::UserId.eq(user_id))
            .filter(contacts::Column::ContactUserId.eq(contact_user_id))
            .one(&self.db)
            .await
            .context("find contact by pair")?;
        Ok(model.map(contact_from_model))
    }

    async fn exists_pair(
        &self,
        user_id: Uuid,
        contact_user_id: Uuid,
    ) -> Result<bool, AccountsServiceError> {
        Ok(self.find_by_pair(user_id, contact_user_id).await?.is_some())
    }

    async fn create(&self, contact: &Contact) -> Result<(), AccountsServiceError> {
        contacts::ActiveModel {
            id: Set(contact.id),
            user_id: Set(contact.user_id),
            contact_user_id: Set(contact.contact_user_id),
            created_at: Set(contact.created_at),
        }
        .insert(&self.db)
        .await
        .context("insert contact")?;
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), AccountsServiceError> {
        contacts::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete contact")?;
        Ok(())
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Contact>, AccountsServiceError> {
        let models = contacts::Entity::find()
            .filter(contacts::Column::UserId.eq(user_id))
            .order_by_asc(contacts::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list contacts")?;
        Ok(models.into_iter().map(contact_from_model).collect())
    }
}

// ── Blocking repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBlockingRepository {
    pub db: DatabaseConnection,
}

fn blocking_from_model(model: block_list::Model) -> Blocking {
    Blocking {
        id: model.id,
        user_id: model.user_id,
        blocked_user_id: model.blocked_user_id,
        created_at: model.created_at,
    }
}

impl BlockingRepository for DbBlockingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blocking>, AccountsServiceError> {
        let model = block_list::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find blocking by id")?;
        Ok(model.map(blocking_from_model))
    }

    async fn find_by_pair(
        &self,
        user_id: Uuid,
        blocked_user_id: Uuid,
    ) -> Result<Option<Blocking>, AccountsServiceError> {
        let model = block_list::Entity::find()
            .filter(block_list::Column::UserId.eq(user_id))
            .filter(block_list::Column::BlockedUserId.eq(blocked_user_id))
            .one(&self.db)
            .await
            .context("find blocking by pair")?;
        Ok(model.map(blocking_from_model))
    }

    async fn exists_pair(
        &self,
        user_id: Uuid,
        blocked_user_id: Uuid,
    ) -> Result<bool, AccountsServiceError> {
        Ok(self.find_by_pair(user_id, blocked_user_id).await?.is_some())
    }

    async fn create(&self, blocking: &Blocking) -> Result<(), AccountsServiceError> {
        block_list::ActiveModel {
            id: Set(blocking.id),
            user_id: Set(blocking.user_id),
            blocked_user_id: Set(blocking.blocked_user_id),
            created_at: Set(blocking.created_at),
        }
        .insert(&self.db)
        .await
        .context("insert blocking")?;
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), AccountsServiceError> {
        block_list::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete blocking")?;
        Ok(())
    }

    async fn list_initiated_by(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Blocking>, AccountsServiceError> {
        let models = block_list::Entity::find()
            .filter(block_list::Column::UserId.eq(user_id))
            .order_by_asc(block_list::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list blockings initiated")?;
        Ok(models.into_iter().map(blocking_from_model).collect())
    }

    async fn list_received_by(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Blocking>, AccountsServiceError> {
        let models = block_list::Entity::find()
            .filter(block_list::Column::BlockedUserId.eq(user_id))
            .order_by_asc(block_list::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list blockings received")?;
        Ok(models.into_iter().map(blocking_from_model).collect())
    }
}

// ── Activity log repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbActivityLogRepository {
    pub db: DatabaseConnection,
}

fn activity_log_from_model(model: activity_logs::Model) -> ActivityLog {
    ActivityLog {
        id: model.id,
        user_id: model.user_id,
        activity_type: activity_type_from_db(model.activity_type),
        active_at: model.active_at,
    }
}

impl ActivityLogRepository for DbActivityLogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ActivityLog>, AccountsServiceError> {
        let model = activity_logs::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find activity log by id")?;
        Ok(model.map(activity_log_from_model))
    }

    async fn create(
        &self,
        user_id: Uuid,
        activity_type: ActivityType,
    ) -> Result<ActivityLog, AccountsServiceError> {
        let model = activity_logs::ActiveModel {
            id: Set(Uuid::now_v7()),
            user_id: Set(user_id),
            activity_type: Set(activity_type_to_db(activity_type)),
            active_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await
        .context("insert activity log")?;
        Ok(activity_log_from_model(model))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, AccountsServiceError> {
        let result = activity_logs::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete activity log")?;
        Ok(result.rows_affected > 0)
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<ActivityLog>, AccountsServiceError> {
        let models = activity_logs::Entity::find()
            .filter(activity_logs::Column::UserId.eq(user_id))
            .order_by_desc(activity_logs::Column::ActiveAt)
            .all(&self.db)
            .await
            .context("list activity logs")?;
        Ok(models.into_iter().map(activity_log_from_model).collect())
    }
}
