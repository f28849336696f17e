//! Authentication store

use std::sync::Arc;

use shared::UserDetails;
use tokio::sync::watch;

use crate::core::error::Result;
use crate::core::service::AccountService;
use crate::storage::{Storage, AUTH_TOKEN_KEY};

/// Current session: the token and the lazily loaded profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserDetails>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.is_empty())
    }
}

/// Session token and user, mirrored into the storage port under `auth_token`.
///
/// `login` only records a token; the backend call that produced it is the
/// caller's business. `logout` always ends with a cleared session.
pub struct AuthStore {
    session: watch::Sender<Session>,
    storage: Arc<dyn Storage>,
}

impl AuthStore {
    /// Rehydrate the token from storage. The user starts unloaded.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let token = storage.get_item(AUTH_TOKEN_KEY);
        tracing::debug!(has_token = token.is_some(), "Auth store rehydrated");

        let (session, _) = watch::channel(Session { token, user: None });
        Self { session, storage }
    }

    pub fn token(&self) -> Option<String> {
        self.session.borrow().token.clone()
    }

    pub fn user(&self) -> Option<UserDetails> {
        self.session.borrow().user.clone()
    }

    pub fn set_user(&self, user: Option<UserDetails>) {
        self.session.send_modify(|session| session.user = user);
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_authenticated()
    }

    /// Snapshot of the whole session.
    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    /// Receiver that observes every session change.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.session.subscribe()
    }

    /// Persist a freshly issued token, then publish it.
    ///
    /// On a storage failure the session is left as it was.
    pub fn login(&self, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        self.storage.set_item(AUTH_TOKEN_KEY, &token)?;
        self.session.send_modify(|session| session.token = Some(token));
        tracing::info!("Session token stored");
        Ok(())
    }

    /// Clear the session, optionally telling the backend first.
    ///
    /// A failing backend call is logged and otherwise ignored; the local
    /// session is cleared either way.
    pub async fn logout(&self, backend: Option<&dyn AccountService>) {
        if let Some(backend) = backend {
            if let Err(e) = backend.logout().await {
                tracing::warn!(error = %e, "Backend logout failed");
            }
        }

        self.session.send_modify(|session| {
            session.token = None;
            session.user = None;
        });

        if let Err(e) = self.storage.remove_item(AUTH_TOKEN_KEY) {
            tracing::warn!(error = %e, "Failed to remove persisted token");
        }
        tracing::info!("Session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiResponse;
    use crate::core::error::ClientError;
    use crate::storage::MemoryStorage;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeBackend {
        fail: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AccountService for FakeBackend {
        async fn logout(&self) -> Result<ApiResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ClientError::Status {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: serde_json::Value::Null,
                })
            } else {
                Ok(ApiResponse {
                    status: StatusCode::OK,
                    data: serde_json::json!({ "detail": "Successfully logged out." }),
                })
            }
        }
    }

    /// Reads work, every write fails
    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> Option<String> {
            None
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
            Err(ClientError::Storage("read-only".to_string()))
        }

        fn remove_item(&self, _key: &str) -> Result<()> {
            Err(ClientError::Storage("read-only".to_string()))
        }
    }

    fn store() -> (AuthStore, Arc<dyn Storage>) {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        (AuthStore::new(storage.clone()), storage)
    }

    fn user() -> UserDetails {
        UserDetails {
            pk: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    #[test]
    fn test_starts_unauthenticated_without_stored_token() {
        let (store, _) = store();
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
        assert_eq!(store.user(), None);
    }

    #[test]
    fn test_rehydrates_token_from_storage() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage.set_item(AUTH_TOKEN_KEY, "persisted").unwrap();

        let store = AuthStore::new(storage);
        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("persisted"));
    }

    #[test]
    fn test_login_sets_token_and_persists() {
        let (store, storage) = store();

        store.login("t-123").unwrap();

        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("t-123"));
        assert_eq!(storage.get_item(AUTH_TOKEN_KEY).as_deref(), Some("t-123"));
    }

    #[test]
    fn test_login_failing_storage_leaves_session_untouched() {
        let store = AuthStore::new(Arc::new(ReadOnlyStorage));
        let rx = store.subscribe();

        let result = store.login("t-1");

        assert!(matches!(result, Err(ClientError::Storage(_))));
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_logout_failing_storage_still_clears_memory() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(AUTH_TOKEN_KEY, "persisted").unwrap();
        let store = AuthStore::new(storage);
        assert!(store.is_authenticated());

        let store = AuthStore {
            session: store.session,
            storage: Arc::new(ReadOnlyStorage),
        };
        store.logout(None).await;

        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let (store, _) = store();
        store.login("").unwrap();
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_without_backend_clears_everything() {
        let (store, storage) = store();
        store.login("t-123").unwrap();
        store.set_user(Some(user()));

        store.logout(None).await;

        assert!(!store.is_authenticated());
        assert_eq!(store.session(), Session::default());
        assert_eq!(storage.get_item(AUTH_TOKEN_KEY), None);
    }

    #[tokio::test]
    async fn test_logout_clears_even_when_backend_fails() {
        let (store, storage) = store();
        store.login("t-123").unwrap();
        store.set_user(Some(user()));

        let backend = FakeBackend {
            fail: true,
            calls: AtomicUsize::new(0),
        };
        store.logout(Some(&backend as &dyn AccountService)).await;

        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
        assert!(!store.is_authenticated());
        assert_eq!(store.user(), None);
        assert_eq!(storage.get_item(AUTH_TOKEN_KEY), None);
    }

    #[tokio::test]
    async fn test_logout_calls_backend_once_on_success() {
        let (store, _) = store();
        store.login("t-123").unwrap();

        let backend = FakeBackend {
            fail: false,
            calls: AtomicUsize::new(0),
        };
        store.logout(Some(&backend as &dyn AccountService)).await;

        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_subscribers_observe_login_and_logout() {
        let (store, _) = store();
        let mut rx = store.subscribe();
        assert!(!rx.borrow_and_update().is_authenticated());

        store.login("t-1").unwrap();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_authenticated());

        store.logout(None).await;
        assert!(rx.has_changed().unwrap());
        assert!(!rx.borrow_and_update().is_authenticated());
    }
}
