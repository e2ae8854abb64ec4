use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(pk_auto(Account::Id))
                    .col(
                        ColumnDef::new(Account::Email)
                            .string()
                            .null()
                            .unique_key(),
                    )
                    .col(string_null(Account::DisplayName))
                    .col(string_null(Account::AvatarUrl))
                    .col(
                        ColumnDef::new(Account::ChatUserId)
                            .string()
                            .null()
                            .unique_key(),
                    )
                    .col(string_null(Account::ChatHandle))
                    .col(timestamp(Account::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Account {
    Table,
    Id,
    Email,
    DisplayName,
    AvatarUrl,
    ChatUserId,
    ChatHandle,
    CreatedAt,
}
