use sea_orm::entity::prelude::*;

/// Kinds of user activity recorded by the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum ActivityType {
    #[sea_orm(string_value = "login")]
    Login,
    #[sea_orm(string_value = "logout")]
    Logout,
    #[sea_orm(string_value = "account_creation")]
    AccountCreation,
    #[sea_orm(string_value = "profile_update")]
    ProfileUpdate,
    #[sea_orm(string_value = "message_sent")]
    MessageSent,
    #[sea_orm(string_value = "message_received")]
    MessageReceived,
    #[sea_orm(string_value = "message_deletion")]
    MessageDeletion,
    #[sea_orm(string_value = "contact_creation")]
    ContactCreation,
    #[sea_orm(string_value = "contact_deletion")]
    ContactDeletion,
    #[sea_orm(string_value = "settings_update")]
    SettingsUpdate,
}

/// One recorded user activity.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "activity_logs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub activity_type: ActivityType,
    pub active_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
