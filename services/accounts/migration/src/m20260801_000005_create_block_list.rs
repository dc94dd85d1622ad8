use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlockList::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlockList::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlockList::UserId).uuid().not_null())
                    .col(ColumnDef::new(BlockList::BlockedUserId).uuid().not_null())
                    .col(
                        ColumnDef::new(BlockList::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BlockList::Table, BlockList::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BlockList::Table, BlockList::BlockedUserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(BlockList::Table)
                    .col(BlockList::UserId)
                    .col(BlockList::BlockedUserId)
                    .name("uidx_block_list_user_pair")
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlockList::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum BlockList {
    Table,
    Id,
    UserId,
    BlockedUserId,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
