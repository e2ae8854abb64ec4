use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250809_000001_account::Account;

static IDX_SIDE_PROJECT_ACCOUNT_ID: &str = "idx-side_project-account_id";
static FK_SIDE_PROJECT_ACCOUNT_ID: &str = "fk-side_project-account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SideProject::Table)
                    .if_not_exists()
                    .col(pk_auto(SideProject::Id))
                    .col(integer(SideProject::AccountId))
                    .col(string(SideProject::Title))
                    .col(string_null(SideProject::Description))
                    .col(string(SideProject::Status))
                    .col(string(SideProject::Priority))
                    .col(big_integer(SideProject::WorkedSeconds).default(0))
                    .col(timestamp(SideProject::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SIDE_PROJECT_ACCOUNT_ID)
                    .table(SideProject::Table)
                    .col(SideProject::AccountId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SIDE_PROJECT_ACCOUNT_ID)
                    .from_tbl(SideProject::Table)
                    .from_col(SideProject::AccountId)
                    .to_tbl(Account::Table)
                    .to_col(Account::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SIDE_PROJECT_ACCOUNT_ID)
                    .table(SideProject::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SIDE_PROJECT_ACCOUNT_ID)
                    .table(SideProject::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SideProject::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SideProject {
    Table,
    Id,
    AccountId,
    Title,
    Description,
    Status,
    Priority,
    WorkedSeconds,
    CreatedAt,
}
