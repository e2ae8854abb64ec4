use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test environment: in-memory SQLite database, mock OAuth provider, and an
/// unattached session backed by a memory store.
///
/// Most tests create this through [`test_setup_with_account_tables!`], which
/// also builds the full table schema from the entity definitions.
pub struct TestSetup {
    /// Mock HTTP server standing in for the OAuth provider.
    pub server: ServerGuard,
    /// Connection to the in-memory SQLite database.
    pub db: DatabaseConnection,
    /// Session for exercising authentication flows.
    pub session: Session,
    /// Mock endpoints registered by fixtures, for assertion.
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            server,
            db,
            session,
            mocks: Vec::new(),
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Create a [`TestSetup`] with every table of the tracker schema, in foreign
/// key dependency order, plus the unique indexes the migrations add on top
/// of the entity-derived tables.
#[macro_export]
macro_rules! test_setup_with_account_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Account),
                schema.create_table_from_entity(entity::prelude::ExternalLogin),
                schema.create_table_from_entity(entity::prelude::Session),
                schema.create_table_from_entity(entity::prelude::Client),
                schema.create_table_from_entity(entity::prelude::Project),
                schema.create_table_from_entity(entity::prelude::SideProject),
                schema.create_table_from_entity(entity::prelude::Invoice),
                schema.create_table_from_entity(entity::prelude::Timer),
            ];
            setup.with_tables(stmts).await?;

            use sea_orm::ConnectionTrait;
            setup
                .db
                .execute_unprepared($crate::constant::TIMER_ACTIVE_INDEX_SQL)
                .await?;
            setup
                .db
                .execute_unprepared($crate::constant::EXTERNAL_LOGIN_PROVIDER_INDEX_SQL)
                .await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}
