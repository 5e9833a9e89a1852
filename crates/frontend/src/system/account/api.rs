use contracts::shared::api::MessageResponse;
use contracts::system::account::ROUTE;
use serde::Serialize;

use crate::shared::api_client::{put_json, ApiError};

/// Profile and password changes share one endpoint.
pub async fn update_account<P: Serialize>(payload: &P) -> Result<MessageResponse, ApiError> {
    put_json(ROUTE, payload).await
}

pub const PROFILE_FAILED: &str = "Failed to update profile.";
pub const PASSWORD_FAILED: &str = "Failed to update password.";
