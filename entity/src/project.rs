use sea_orm::entity::prelude::*;

/// A commissioned project. `worked_seconds` is only ever incremented by a
/// timer stop, in whole seconds.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub account_id: i32,
    pub client_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub worked_seconds: i64,
    pub due_date: Option<DateTime>,
    pub completed_at: Option<DateTime>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id"
    )]
    Account,
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id"
    )]
    Client,
    #[sea_orm(has_many = "super::timer::Entity")]
    Timer,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::timer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Timer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
