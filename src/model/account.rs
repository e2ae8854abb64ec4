use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AccountDto {
    pub id: i32,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub chat_handle: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<entity::account::Model> for AccountDto {
    fn from(account: entity::account::Model) -> Self {
        Self {
            id: account.id,
            email: account.email,
            display_name: account.display_name,
            avatar_url: account.avatar_url,
            chat_handle: account.chat_handle,
            created_at: account.created_at,
        }
    }
}

/// Per-table row counts removed by an account data teardown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ClearedDataDto {
    pub timers: u64,
    pub invoices: u64,
    pub projects: u64,
    pub side_projects: u64,
    pub clients: u64,
    pub external_logins: u64,
    pub sessions: u64,
    pub account_deleted: bool,
}
