use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250809_000001_account::Account, m20250809_000004_client::Client};

static IDX_PROJECT_ACCOUNT_ID: &str = "idx-project-account_id";
static FK_PROJECT_ACCOUNT_ID: &str = "fk-project-account_id";
static FK_PROJECT_CLIENT_ID: &str = "fk-project-client_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(pk_auto(Project::Id))
                    .col(integer(Project::AccountId))
                    .col(integer_null(Project::ClientId))
                    .col(string(Project::Title))
                    .col(string_null(Project::Description))
                    .col(string(Project::Status))
                    .col(string(Project::Priority))
                    .col(big_integer(Project::WorkedSeconds).default(0))
                    .col(timestamp_null(Project::DueDate))
                    .col(timestamp_null(Project::CompletedAt))
                    .col(timestamp(Project::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PROJECT_ACCOUNT_ID)
                    .table(Project::Table)
                    .col(Project::AccountId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROJECT_ACCOUNT_ID)
                    .from_tbl(Project::Table)
                    .from_col(Project::AccountId)
                    .to_tbl(Account::Table)
                    .to_col(Account::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROJECT_CLIENT_ID)
                    .from_tbl(Project::Table)
                    .from_col(Project::ClientId)
                    .to_tbl(Client::Table)
                    .to_col(Client::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PROJECT_CLIENT_ID)
                    .table(Project::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PROJECT_ACCOUNT_ID)
                    .table(Project::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PROJECT_ACCOUNT_ID)
                    .table(Project::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Project {
    Table,
    Id,
    AccountId,
    ClientId,
    Title,
    Description,
    Status,
    Priority,
    WorkedSeconds,
    DueDate,
    CompletedAt,
    CreatedAt,
}
