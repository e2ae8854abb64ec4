pub use sea_orm_migration::prelude::*;

mod m20250809_000001_account;
mod m20250809_000002_external_login;
mod m20250809_000003_session;
mod m20250809_000004_client;
mod m20250809_000005_project;
mod m20250809_000006_side_project;
mod m20250809_000007_invoice;
mod m20250809_000008_timer;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250809_000001_account::Migration),
            Box::new(m20250809_000002_external_login::Migration),
            Box::new(m20250809_000003_session::Migration),
            Box::new(m20250809_000004_client::Migration),
            Box::new(m20250809_000005_project::Migration),
            Box::new(m20250809_000006_side_project::Migration),
            Box::new(m20250809_000007_invoice::Migration),
            Box::new(m20250809_000008_timer::Migration),
        ]
    }
}
