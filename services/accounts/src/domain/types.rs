use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Lifecycle status of a user or role row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    NotActive,
    Deleted,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::NotActive => "not_active",
            Self::Deleted => "deleted",
        }
    }
}

/// User account owned by this service. `password_hash` is an argon2 PHC
/// string and never appears in public projections.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub login: String,
    pub password_hash: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for a freshly validated registration, ready to persist.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Uuid,
    pub login: String,
    pub password_hash: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

/// Partial profile update. `None` means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub login: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Role {
    pub id: Uuid,
    pub role_name: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Directional contact edge: `user_id` keeps `contact_user_id` in their list.
#[derive(Debug, Clone)]
pub struct Contact {
    pub id: Uuid,
    pub user_id: Uuid,
    pub contact_user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Directional blocking edge: `user_id` blocked `blocked_user_id`.
#[derive(Debug, Clone)]
pub struct Blocking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub blocked_user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Kinds of recorded user activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityType {
    Login,
    Logout,
    AccountCreation,
    ProfileUpdate,
    MessageSent,
    MessageReceived,
    MessageDeletion,
    ContactCreation,
    ContactDeletion,
    SettingsUpdate,
}

impl ActivityType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Logout => "logout",
            Self::AccountCreation => "account_creation",
            Self::ProfileUpdate => "profile_update",
            Self::MessageSent => "message_sent",
            Self::MessageReceived => "message_received",
            Self::MessageDeletion => "message_deletion",
            Self::ContactCreation => "contact_creation",
            Self::ContactDeletion => "contact_deletion",
            Self::SettingsUpdate => "settings_update",
        }
    }

    pub fn from_snake_case(s: &str) -> Option<Self> {
        match s {
            "login" => Some(Self::Login),
            "logout" => Some(Self::Logout),
            "account_creation" => Some(Self::AccountCreation),
            "profile_update" => Some(Self::ProfileUpdate),
            "message_sent" => Some(Self::MessageSent),
            "message_received" => Some(Self::MessageReceived),
            "message_deletion" => Some(Self::MessageDeletion),
            "contact_creation" => Some(Self::ContactCreation),
            "contact_deletion" => Some(Self::ContactDeletion),
            "settings_update" => Some(Self::SettingsUpdate),
            _ => None,
        }
    }
}

/// One recorded user activity.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub activity_type: ActivityType,
    pub active_at: DateTime<Utc>,
}

/// Which side of the blocking relation to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockingDirection {
    #[default]
    Initiated,
    Received,
}

impl BlockingDirection {
    pub fn from_kebab_case(s: &str) -> Option<Self> {
        match s {
            "initiated" => Some(Self::Initiated),
            "received" => Some(Self::Received),
            _ => None,
        }
    }
}
