use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

// Uniqueness only counts non-deleted rows (a soft-deleted account releases
// its login), so the backstop for the read-then-write registration check is
// a partial unique index rather than a column constraint.
const UIDX_USERS_LOGIN: &str =
    "CREATE UNIQUE INDEX uidx_users_login ON users (login) WHERE status <> 'deleted'";
const UIDX_USERS_EMAIL: &str =
    "CREATE UNIQUE INDEX uidx_users_email ON users (email) WHERE status <> 'deleted'";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Login).string_len(254).not_null())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Firstname).string_len(99).not_null())
                    .col(ColumnDef::new(Users::Lastname).string_len(99).not_null())
                    .col(ColumnDef::new(Users::Email).string_len(254).not_null())
                    .col(
                        ColumnDef::new(Users::Status)
                            .string_len(16)
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;
        let conn = manager.get_connection();
        conn.execute_unprepared(UIDX_USERS_LOGIN).await?;
        conn.execute_unprepared(UIDX_USERS_EMAIL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Login,
    PasswordHash,
    Firstname,
    Lastname,
    Email,
    Status,
    CreatedAt,
    UpdatedAt,
}
