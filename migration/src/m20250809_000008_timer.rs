use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250809_000001_account::Account, m20250809_000005_project::Project};

static IDX_TIMER_ACCOUNT_ID: &str = "idx-timer-account_id";
static FK_TIMER_ACCOUNT_ID: &str = "fk-timer-account_id";
static FK_TIMER_PROJECT_ID: &str = "fk-timer-project_id";

/// Partial unique index guaranteeing at most one active timer per account.
/// Two concurrent starts cannot both commit an `is_active` row; the second
/// insert fails on this index. Same SQL is accepted by SQLite and Postgres.
const IDX_TIMER_ACCOUNT_ACTIVE: &str =
    "CREATE UNIQUE INDEX \"idx-timer-account_id-active\" ON \"timer\" (\"account_id\") WHERE \"is_active\"";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Timer::Table)
                    .if_not_exists()
                    .col(pk_auto(Timer::Id))
                    .col(integer(Timer::AccountId))
                    .col(integer_null(Timer::ProjectId))
                    .col(timestamp(Timer::StartedAt))
                    .col(timestamp_null(Timer::EndedAt))
                    .col(big_integer_null(Timer::DurationSeconds))
                    .col(boolean(Timer::IsActive))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TIMER_ACCOUNT_ID)
                    .table(Timer::Table)
                    .col(Timer::AccountId)
                    .to_owned(),
            )
            .await?;

        // Partial indexes are not expressible through the schema builder.
        manager
            .get_connection()
            .execute_unprepared(IDX_TIMER_ACCOUNT_ACTIVE)
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TIMER_ACCOUNT_ID)
                    .from_tbl(Timer::Table)
                    .from_col(Timer::AccountId)
                    .to_tbl(Account::Table)
                    .to_col(Account::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TIMER_PROJECT_ID)
                    .from_tbl(Timer::Table)
                    .from_col(Timer::ProjectId)
                    .to_tbl(Project::Table)
                    .to_col(Project::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TIMER_PROJECT_ID)
                    .table(Timer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TIMER_ACCOUNT_ID)
                    .table(Timer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP INDEX \"idx-timer-account_id-active\"")
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TIMER_ACCOUNT_ID)
                    .table(Timer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Timer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Timer {
    Table,
    Id,
    AccountId,
    ProjectId,
    StartedAt,
    EndedAt,
    DurationSeconds,
    IsActive,
}
