//! # Authentication Endpoints
//!
//! Login, social login, registration, logout, user details and password
//! change under `/accounts/`.

use async_trait::async_trait;
use shared::{LoginRequest, PasswordChangeRequest, RegisterRequest, SocialLoginRequest};

use super::client::{ApiClient, ApiResponse};
use crate::core::error::Result;
use crate::core::service::AccountService;

impl ApiClient {
    /// Login with username or email and password. The body carries `key`.
    #[tracing::instrument(skip_all)]
    pub async fn login(&self, credentials: &LoginRequest) -> Result<ApiResponse> {
        tracing::info!("Attempting login");
        self.post("/accounts/login/", credentials).await
    }

    /// Exchange a Google access token for a session token.
    pub async fn google_login(&self, access_token: &str) -> Result<ApiResponse> {
        let request = SocialLoginRequest {
            access_token: access_token.to_string(),
        };
        self.post("/accounts/google/", &request).await
    }

    /// Sign up a new user.
    pub async fn register(&self, user: &RegisterRequest) -> Result<ApiResponse> {
        self.post("/accounts/registration/", user).await
    }

    pub async fn logout(&self) -> Result<ApiResponse> {
        self.post_empty("/accounts/logout/").await
    }

    pub async fn get_user_info(&self) -> Result<ApiResponse> {
        self.get("/accounts/user/").await
    }

    pub async fn change_password(&self, request: &PasswordChangeRequest) -> Result<ApiResponse> {
        self.post("/accounts/mypage/profile/password/change/", request)
            .await
    }
}

#[async_trait]
impl AccountService for ApiClient {
    async fn logout(&self) -> Result<ApiResponse> {
        ApiClient::logout(self).await
    }
}
