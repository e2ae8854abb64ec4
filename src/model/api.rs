use serde::{Deserialize, Serialize};

/// Body shared by every error response the API returns.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// Human-readable message safe to surface to the dashboard
    pub error: String,
}
