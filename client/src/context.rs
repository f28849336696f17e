//! # Application Context
//!
//! One explicit object owning everything a view needs: configuration, the
//! storage port, the API client and both stores. Views receive a reference
//! instead of reaching for globals.

use std::sync::Arc;

use shared::{
    ComparisonAnalyzeRequest, LoginRequest, RegisterRequest, TokenResponse, UserDetails,
    UserPreferences,
};

use crate::api::{ApiClient, ApiResponse};
use crate::config::ClientConfig;
use crate::core::error::Result;
use crate::core::service::AccountService;
use crate::notify::{LogNotifier, Notifier};
use crate::storage::{FileStorage, Storage};
use crate::stores::{AuthStore, ComparisonStore};

pub struct AppContext {
    pub config: ClientConfig,
    pub storage: Arc<dyn Storage>,
    pub api: ApiClient,
    pub auth: AuthStore,
    pub comparison: ComparisonStore,
}

impl AppContext {
    /// Wire the client and stores over a shared storage port.
    pub fn new(
        config: ClientConfig,
        storage: Arc<dyn Storage>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let api = ApiClient::new(&config, storage.clone())?;
        let auth = AuthStore::new(storage.clone());
        let comparison = ComparisonStore::new(storage.clone(), notifier);

        tracing::debug!(base_url = %api.base_url(), "Application context ready");

        Ok(Self {
            config,
            storage,
            api,
            auth,
            comparison,
        })
    }

    /// Native setup: file-backed storage at `config.storage_path` and
    /// notifications through the log.
    pub fn native(config: ClientConfig) -> Result<Self> {
        let storage: Arc<dyn Storage> = Arc::new(FileStorage::open(&config.storage_path));
        Self::new(config, storage, Arc::new(LogNotifier))
    }

    /// Client identifier for the Google sign-in widget, if configured.
    pub fn google_client_id(&self) -> Option<&str> {
        self.config.google_client_id.as_deref()
    }

    /// Log in and store the issued token.
    pub async fn sign_in(&self, credentials: &LoginRequest) -> Result<()> {
        let response = self.api.login(credentials).await?;
        self.accept_token(response)
    }

    /// Register and store the issued token.
    pub async fn sign_up(&self, user: &RegisterRequest) -> Result<()> {
        let response = self.api.register(user).await?;
        self.accept_token(response)
    }

    /// Forward a Google access token and store the issued session token.
    pub async fn sign_in_with_google(&self, access_token: &str) -> Result<()> {
        let response = self.api.google_login(access_token).await?;
        self.accept_token(response)
    }

    fn accept_token(&self, response: ApiResponse) -> Result<()> {
        let TokenResponse { key } = response.into_json()?;
        self.auth.login(key)?;
        // The previous user belonged to the previous token
        self.auth.set_user(None);
        Ok(())
    }

    /// Current user, fetched on first use. `None` when signed out.
    pub async fn load_user(&self) -> Result<Option<UserDetails>> {
        if !self.auth.is_authenticated() {
            return Ok(None);
        }
        if let Some(user) = self.auth.user() {
            return Ok(Some(user));
        }

        let user: UserDetails = self.api.get_user_info().await?.into_json()?;
        tracing::debug!(user_id = user.pk, "User details loaded");
        self.auth.set_user(Some(user.clone()));
        Ok(Some(user))
    }

    /// Clear the session. With `notify_backend` the server-side token is
    /// revoked first; failures there never keep the local session alive.
    pub async fn sign_out(&self, notify_backend: bool) {
        let backend = notify_backend.then_some(&self.api as &dyn AccountService);
        self.auth.logout(backend).await;
    }

    /// Analyze the courses currently in the comparison basket.
    pub async fn analyze_comparison(
        &self,
        weekly_hours: u32,
        preferences: UserPreferences,
        goal: Option<String>,
    ) -> Result<ApiResponse> {
        let request = ComparisonAnalyzeRequest {
            course_ids: self.comparison.course_ids(),
            weekly_hours,
            user_preferences: preferences,
            user_goal: goal,
        };
        self.api.analyze_comparison(&request).await
    }
}
