use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250809_000001_account::Account;

static IDX_CLIENT_ACCOUNT_ID: &str = "idx-client-account_id";
static FK_CLIENT_ACCOUNT_ID: &str = "fk-client-account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Client::Table)
                    .if_not_exists()
                    .col(pk_auto(Client::Id))
                    .col(integer(Client::AccountId))
                    .col(string(Client::Name))
                    .col(string_null(Client::Email))
                    .col(string_null(Client::Company))
                    .col(timestamp(Client::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CLIENT_ACCOUNT_ID)
                    .table(Client::Table)
                    .col(Client::AccountId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CLIENT_ACCOUNT_ID)
                    .from_tbl(Client::Table)
                    .from_col(Client::AccountId)
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
                    .name(FK_CLIENT_ACCOUNT_ID)
                    .table(Client::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CLIENT_ACCOUNT_ID)
                    .table(Client::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Client::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Client {
    Table,
    Id,
    AccountId,
    Name,
    Email,
    Company,
    CreatedAt,
}
