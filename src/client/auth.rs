use serde_json::json;

use super::{cache_buster, ApiClient};
use crate::{
    error::api::ApiError,
    model::{
        api::ApiResponse,
        auth::{LoginData, LoginRequest, RegisterRequest, ResetPasswordRequest},
        content::GuestConfig,
    },
};

impl ApiClient {
    /// Exchanges email and password for a session credential.
    ///
    /// Does not start the session itself; hand the returned credential to
    /// [`SessionManager::login`](crate::session::SessionManager::login).
    ///
    /// # Returns
    /// - `Ok(String)` - The credential (`auth_data`)
    /// - `Err(ApiError::Rejected)` - The backend accepted the request but returned no credential
    /// - `Err(ApiError)` - The request failed
    pub async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        let data: LoginData = self.post_json_data("/passport/auth/login", request).await?;

        data.auth_data
            .filter(|credential| !credential.is_empty())
            .ok_or_else(|| {
                ApiError::Rejected("Login failed, no authentication token was returned.".to_string())
            })
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.post_json::<serde_json::Value, _>("/passport/auth/register", request)
            .await
            .map(|_| ())
    }

    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), ApiError> {
        self.post_json::<serde_json::Value, _>("/passport/auth/forget", request)
            .await
            .map(|_| ())
    }

    /// Asks the backend to email a verification code.
    pub async fn send_email_verify(&self, email: &str) -> Result<(), ApiError> {
        self.post_json::<serde_json::Value, _>(
            "/passport/comm/sendEmailVerify",
            &json!({ "email": email }),
        )
        .await
        .map(|_| ())
    }

    /// Public site configuration, available before sign-in.
    pub async fn guest_config(&self) -> Result<GuestConfig, ApiError> {
        self.get_with_query::<ApiResponse<GuestConfig>, _>(
            "/guest/comm/config",
            &[("t", cache_buster())],
        )
        .await
        .map(|response| response.data)
    }
}
