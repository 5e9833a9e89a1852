use contracts::domain::common::RecordId;
use contracts::shared::api::MessageResponse;
use contracts::system::auth::{
    AuthUser, LoginRequest, LoginResponse, ResendRequest, VerifyCodeRequest, VerifyCodeResponse,
    CURRENT_USER_ROUTE, LOGIN_ROUTE, LOGOUT_ROUTE, RESEND_ROUTE, VERIFY_ROUTE,
};

use crate::shared::api_client::{get_json, post_empty, post_json, ApiError};

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    post_json(LOGIN_ROUTE, &request).await
}

/// Exchange the emailed one-time code for a token
pub async fn verify_code(user_id: RecordId, code: String) -> Result<VerifyCodeResponse, ApiError> {
    let request = VerifyCodeRequest { user_id, code };
    post_json(VERIFY_ROUTE, &request).await
}

pub async fn resend_code(user_id: RecordId) -> Result<MessageResponse, ApiError> {
    post_json(RESEND_ROUTE, &ResendRequest { user_id }).await
}

/// Revoke the current token
pub async fn logout() -> Result<(), ApiError> {
    post_empty(LOGOUT_ROUTE).await
}

/// `/api/user` answers with the bare user object, no envelope.
pub async fn get_current_user() -> Result<AuthUser, ApiError> {
    get_json(CURRENT_USER_ROUTE).await
}
