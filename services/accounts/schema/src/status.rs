use sea_orm::entity::prelude::*;

/// Lifecycle status shared by user and role rows.
///
/// Soft deletion sets `Deleted` without removing the row, so login/email
/// uniqueness is scoped to non-deleted rows: the service checks at write
/// time and partial unique indexes enforce it in the database.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Status {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "not_active")]
    NotActive,
    #[sea_orm(string_value = "deleted")]
    Deleted,
}
