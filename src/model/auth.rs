use serde::{Deserialize, Serialize};

/// Provider authorization URL the dashboard navigates to for sign-in.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginUrlDto {
    pub login_url: String,
}
