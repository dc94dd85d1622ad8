use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use parley_accounts::domain::repository::{
    ActivityLogRepository, BlockingRepository, ContactRepository, RoleRepository, UserRepository,
};
use parley_accounts::domain::types::{
    ActivityLog, ActivityType, Blocking, Contact, NewUser, ProfilePatch, Role, Status, User,
};
use parley_accounts::error::AccountsServiceError;
use parley_accounts::usecase::user::hash_password;

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
    pub role_catalog: Arc<Vec<Role>>,
    pub assignments: Arc<Mutex<Vec<(Uuid, Uuid)>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>, role_catalog: Vec<Role>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
            role_catalog: Arc::new(role_catalog),
            assignments: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![], vec![])
    }

    pub fn stored(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccountsServiceError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, AccountsServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.login == login)
            .cloned())
    }

    async fn exists_by_login(&self, login: &str) -> Result<bool, AccountsServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.login == login && u.status != Status::Deleted))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AccountsServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.email == email && u.status != Status::Deleted))
    }

    async fn create(&self, user: &NewUser, role_id: Uuid) -> Result<User, AccountsServiceError> {
        let now = Utc::now();
        let stored = User {
            id: user.id,
            login: user.login.clone(),
            password_hash: user.password_hash.clone(),
            firstname: user.firstname.clone(),
            lastname: user.lastname.clone(),
            email: user.email.clone(),
            status: Status::Active,
            created_at: now,
            updated_at: now,
        };
        self.users.lock().unwrap().push(stored.clone());
        self.assignments.lock().unwrap().push((user.id, role_id));
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<User>, AccountsServiceError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn update_profile(
        &self,
        id: Uuid,
        patch: &ProfilePatch,
    ) -> Result<User, AccountsServiceError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(AccountsServiceError::UserNotFound)?;
        if let Some(ref login) = patch.login {
            user.login = login.clone();
        }
        if let Some(ref firstname) = patch.firstname {
            user.firstname = firstname.clone();
        }
        if let Some(ref lastname) = patch.lastname {
            user.lastname = lastname.clone();
        }
        if let Some(ref email) = patch.email {
            user.email = email.clone();
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), AccountsServiceError> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == id) {
            user.password_hash = password_hash.to_owned();
            user.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn set_status(&self, id: Uuid, status: Status) -> Result<(), AccountsServiceError> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == id) {
            user.status = status;
            user.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AccountsServiceError> {
        self.users.lock().unwrap().retain(|u| u.id != id);
        self.assignments.lock().unwrap().retain(|(uid, _)| *uid != id);
        Ok(())
    }

    async fn roles_of(&self, id: Uuid) -> Result<Vec<Role>, AccountsServiceError> {
        let assignments = self.assignments.lock().unwrap();
        Ok(self
            .role_catalog
            .iter()
            .filter(|r| assignments.iter().any(|(uid, rid)| *uid == id && *rid == r.id))
            .cloned()
            .collect())
    }
}

// ── MockRoleRepo ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockRoleRepo {
    pub roles: Arc<Mutex<Vec<Role>>>,
    pub members: Arc<Vec<(Uuid, User)>>,
}

impl MockRoleRepo {
    pub fn new(roles: Vec<Role>) -> Self {
        Self {
            roles: Arc::new(Mutex::new(roles)),
            members: Arc::new(vec![]),
        }
    }

    pub fn with_members(roles: Vec<Role>, members: Vec<(Uuid, User)>) -> Self {
        Self {
            roles: Arc::new(Mutex::new(roles)),
            members: Arc::new(members),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn stored(&self) -> Vec<Role> {
        self.roles.lock().unwrap().clone()
    }
}

impl RoleRepository for MockRoleRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Role>, AccountsServiceError> {
        Ok(self.roles.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, AccountsServiceError> {
        Ok(self
            .roles
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.role_name == name)
            .cloned())
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, AccountsServiceError> {
        Ok(self.roles.lock().unwrap().iter().any(|r| r.role_name == name))
    }

    async fn create(&self, role: &Role) -> Result<(), AccountsServiceError> {
        self.roles.lock().unwrap().push(role.clone());
        Ok(())
    }

    async fn rename(&self, id: Uuid, name: &str) -> Result<Role, AccountsServiceError> {
        let mut roles = self.roles.lock().unwrap();
        let role = roles
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(AccountsServiceError::RoleNotFound)?;
        role.role_name = name.to_owned();
        role.updated_at = Utc::now();
        Ok(role.clone())
    }

    async fn set_status(&self, id: Uuid, status: Status) -> Result<(), AccountsServiceError> {
        let mut roles = self.roles.lock().unwrap();
        if let Some(role) = roles.iter_mut().find(|r| r.id == id) {
            role.status = status;
            role.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AccountsServiceError> {
        self.roles.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Role>, AccountsServiceError> {
        Ok(self.roles.lock().unwrap().clone())
    }

    async fn users_with_role(&self, role_id: Uuid) -> Result<Vec<User>, AccountsServiceError> {
        Ok(self
            .members
            .iter()
            .filter(|(rid, _)| *rid == role_id)
            .map(|(_, u)| u.clone())
            .collect())
    }
}

// ── MockContactRepo ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockContactRepo {
    pub contacts: Arc<Mutex<Vec<Contact>>>,
}

impl MockContactRepo {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Arc::new(Mutex::new(contacts)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn stored(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }
}

impl ContactRepository for MockContactRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, AccountsServiceError> {
        Ok(self
            .contacts
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_by_pair(
        &self,
        user_id: Uuid,
        contact_user_id: Uuid,
    ) -> Result<Option<Contact>, AccountsServiceError> {
        Ok(self
            .contacts
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.user_id == user_id && c.contact_user_id == contact_user_id)
            .cloned())
    }

    async fn exists_pair(
        &self,
        user_id: Uuid,
        contact_user_id: Uuid,
    ) -> Result<bool, AccountsServiceError> {
        Ok(self
            .contacts
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.user_id == user_id && c.contact_user_id == contact_user_id))
    }

    async fn create(&self, contact: &Contact) -> Result<(), AccountsServiceError> {
        self.contacts.lock().unwrap().push(contact.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), AccountsServiceError> {
        self.contacts.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Contact>, AccountsServiceError> {
        Ok(self
            .contacts
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }
}

// ── MockBlockingRepo ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockBlockingRepo {
    pub blockings: Arc<Mutex<Vec<Blocking>>>,
}

impl MockBlockingRepo {
    pub fn new(blockings: Vec<Blocking>) -> Self {
        Self {
            blockings: Arc::new(Mutex::new(blockings)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn stored(&self) -> Vec<Blocking> {
        self.blockings.lock().unwrap().clone()
    }
}

impl BlockingRepository for MockBlockingRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blocking>, AccountsServiceError> {
        Ok(self
            .blockings
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn find_by_pair(
        &self,
        user_id: Uuid,
        blocked_user_id: Uuid,
    ) -> Result<Option<Blocking>, AccountsServiceError> {
        Ok(self
            .blockings
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.user_id == user_id && b.blocked_user_id == blocked_user_id)
            .cloned())
    }

    async fn exists_pair(
        &self,
        user_id: Uuid,
        blocked_user_id: Uuid,
    ) -> Result<bool, AccountsServiceError> {
        Ok(self
            .blockings
            .lock()
            .unwrap()
            .iter()
            .any(|b| b.user_id == user_id && b.blocked_user_id == blocked_user_id))
    }

    async fn create(&self, blocking: &Blocking) -> Result<(), AccountsServiceError> {
        self.blockings.lock().unwrap().push(blocking.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), AccountsServiceError> {
        self.blockings.lock().unwrap().retain(|b| b.id != id);
        Ok(())
    }

    async fn list_initiated_by(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Blocking>, AccountsServiceError> {
        Ok(self
            .blockings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_received_by(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Blocking>, AccountsServiceError> {
        Ok(self
            .blockings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.blocked_user_id == user_id)
            .cloned()
            .collect())
    }
}

// ── MockActivityLogRepo ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockActivityLogRepo {
    pub logs: Arc<Mutex<Vec<ActivityLog>>>,
}

impl MockActivityLogRepo {
    pub fn new(logs: Vec<ActivityLog>) -> Self {
        Self {
            logs: Arc::new(Mutex::new(logs)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn stored(&self) -> Vec<ActivityLog> {
        self.logs.lock().unwrap().clone()
    }
}

impl ActivityLogRepository for MockActivityLogRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ActivityLog>, AccountsServiceError> {
        Ok(self.logs.lock().unwrap().iter().find(|l| l.id == id).cloned())
    }

    async fn create(
        &self,
        user_id: Uuid,
        activity_type: ActivityType,
    ) -> Result<ActivityLog, AccountsServiceError> {
        let log = ActivityLog {
            id: Uuid::now_v7(),
            user_id,
            activity_type,
            active_at: Utc::now(),
        };
        self.logs.lock().unwrap().push(log.clone());
        Ok(log)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, AccountsServiceError> {
        let mut logs = self.logs.lock().unwrap();
        let before = logs.len();
        logs.retain(|l| l.id != id);
        Ok(logs.len() < before)
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<ActivityLog>, AccountsServiceError> {
        Ok(self
            .logs
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect())
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_user(login: &str, email: &str, password: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::now_v7(),
        login: login.to_owned(),
        password_hash: hash_password(password).unwrap(),
        firstname: "Alice".to_owned(),
        lastname: "Smith".to_owned(),
        email: email.to_owned(),
        status: Status::Active,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_role(name: &str) -> Role {
    let now = Utc::now();
    Role {
        id: Uuid::now_v7(),
        role_name: name.to_owned(),
        status: Status::Active,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_contact(user_id: Uuid, contact_user_id: Uuid) -> Contact {
    Contact {
        id: Uuid::now_v7(),
        user_id,
        contact_user_id,
        created_at: Utc::now(),
    }
}

pub fn test_blocking(user_id: Uuid, blocked_user_id: Uuid) -> Blocking {
    Blocking {
        id: Uuid::now_v7(),
        user_id,
        blocked_user_id,
        created_at: Utc::now(),
    }
}
