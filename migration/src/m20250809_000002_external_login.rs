use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250809_000001_account::Account;

static IDX_EXTERNAL_LOGIN_PROVIDER_ACCOUNT: &str = "idx-external_login-provider-provider_account_id";
static FK_EXTERNAL_LOGIN_ACCOUNT_ID: &str = "fk-external_login-account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExternalLogin::Table)
                    .if_not_exists()
                    .col(pk_auto(ExternalLogin::Id))
                    .col(integer(ExternalLogin::AccountId))
                    .col(string(ExternalLogin::Provider))
                    .col(string(ExternalLogin::ProviderAccountId))
                    .col(timestamp(ExternalLogin::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EXTERNAL_LOGIN_PROVIDER_ACCOUNT)
                    .table(ExternalLogin::Table)
                    .col(ExternalLogin::Provider)
                    .col(ExternalLogin::ProviderAccountId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EXTERNAL_LOGIN_ACCOUNT_ID)
                    .from_tbl(ExternalLogin::Table)
                    .from_col(ExternalLogin::AccountId)
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
                    .name(FK_EXTERNAL_LOGIN_ACCOUNT_ID)
                    .table(ExternalLogin::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EXTERNAL_LOGIN_PROVIDER_ACCOUNT)
                    .table(ExternalLogin::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ExternalLogin::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ExternalLogin {
    Table,
    Id,
    AccountId,
    Provider,
    ProviderAccountId,
    CreatedAt,
}
