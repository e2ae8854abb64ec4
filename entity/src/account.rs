use sea_orm::entity::prelude::*;

/// Canonical identity record behind both the web dashboard and the chat bot.
///
/// `email` and `chat_user_id` are each unique when present; either entry
/// point may create the row first and the other attaches to it later.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    #[sea_orm(unique)]
    pub chat_user_id: Option<String>,
    pub chat_handle: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::client::Entity")]
    Client,
    #[sea_orm(has_many = "super::external_login::Entity")]
    ExternalLogin,
    #[sea_orm(has_many = "super::invoice::Entity")]
    Invoice,
    #[sea_orm(has_many = "super::project::Entity")]
    Project,
    #[sea_orm(has_many = "super::session::Entity")]
    Session,
    #[sea_orm(has_many = "super::side_project::Entity")]
    SideProject,
    #[sea_orm(has_many = "super::timer::Entity")]
    Timer,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::external_login::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExternalLogin.def()
    }
}

impl Related<super::invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoice.def()
    }
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl Related<super::session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl Related<super::side_project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SideProject.def()
    }
}

impl Related<super::timer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Timer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
