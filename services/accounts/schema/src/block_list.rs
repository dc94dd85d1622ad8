use sea_orm::entity::prelude::*;

/// Directional blocking edge: `user_id` blocked `blocked_user_id`.
/// At most one row per ordered pair (unique index).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "block_list")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub blocked_user_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
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
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::BlockedUserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    BlockedUser,
}

impl ActiveModelBehavior for ActiveModel {}
