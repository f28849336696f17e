use serde::{Deserialize, Serialize};

/// Login request
///
/// The backend accepts either a username or an email next to the password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub password: String,
}

impl LoginRequest {
    pub fn with_username(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            email: None,
            password: password.into(),
        }
    }

    pub fn with_email(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: None,
            email: Some(email.into()),
            password: password.into(),
        }
    }
}

/// Terms the user agrees to on registration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Consent {
    pub terms_service: bool,
    pub terms_privacy: bool,
    pub marketing_opt_in: bool,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub name: String,
    pub password1: String,
    pub password2: String,
    pub consent: Consent,
}

/// Social login request carrying the provider's access token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialLoginRequest {
    pub access_token: String,
}

/// Password change request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordChangeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    pub new_password1: String,
    pub new_password2: String,
}

/// Token issued by login, registration and social login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub key: String,
}

/// Authenticated user details (`/accounts/user/`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDetails {
    pub pk: i64,
    pub username: String,
    pub email: String,
}

/// Error response
///
/// Field-level validation errors come back as a map keyed by field name and
/// are left in the raw body; only `detail` is modelled here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<String>,
}
