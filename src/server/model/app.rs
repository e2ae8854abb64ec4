use sea_orm::DatabaseConnection;

use crate::server::oauth::OauthClient;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub oauth: OauthClient,
}
