use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250809_000001_account::Account, m20250809_000004_client::Client};

static IDX_INVOICE_ACCOUNT_ID: &str = "idx-invoice-account_id";
static FK_INVOICE_ACCOUNT_ID: &str = "fk-invoice-account_id";
static FK_INVOICE_CLIENT_ID: &str = "fk-invoice-client_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoice::Table)
                    .if_not_exists()
                    .col(pk_auto(Invoice::Id))
                    .col(integer(Invoice::AccountId))
                    .col(integer_null(Invoice::ClientId))
                    .col(string(Invoice::InvoiceNumber))
                    .col(double(Invoice::Amount))
                    .col(string_null(Invoice::Description))
                    .col(string(Invoice::Status))
                    .col(timestamp_null(Invoice::DueDate))
                    .col(timestamp_null(Invoice::PaidAt))
                    .col(timestamp(Invoice::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INVOICE_ACCOUNT_ID)
                    .table(Invoice::Table)
                    .col(Invoice::AccountId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INVOICE_ACCOUNT_ID)
                    .from_tbl(Invoice::Table)
                    .from_col(Invoice::AccountId)
                    .to_tbl(Account::Table)
                    .to_col(Account::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INVOICE_CLIENT_ID)
                    .from_tbl(Invoice::Table)
                    .from_col(Invoice::ClientId)
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
                    .name(FK_INVOICE_CLIENT_ID)
                    .table(Invoice::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_INVOICE_ACCOUNT_ID)
                    .table(Invoice::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INVOICE_ACCOUNT_ID)
                    .table(Invoice::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Invoice::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Invoice {
    Table,
    Id,
    AccountId,
    ClientId,
    InvoiceNumber,
    Amount,
    Description,
    Status,
    DueDate,
    PaidAt,
    CreatedAt,
}
