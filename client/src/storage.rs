//! # Persistence Port
//!
//! String key/value storage with browser local-storage semantics. The stores
//! and the HTTP client only ever talk to the [`Storage`] trait, so the same
//! code runs against an in-memory map in tests, a JSON file on native targets
//! and `window.localStorage` in the browser (feature `browser`).

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::{Mutex, RwLock};

use crate::core::error::{ClientError, Result};

/// Key holding the session token as a plain string.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Key holding the comparison basket as a JSON array.
pub const COMPARISON_ITEMS_KEY: &str = "comparison_items";

/// Persisted key/value store.
pub trait Storage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// In-process storage. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.read().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.write().remove(key);
        Ok(())
    }
}

/// Storage persisted as a single JSON object file.
///
/// The file is read once when opened and rewritten in full on every
/// mutation. A missing or unreadable file opens as empty storage.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: Mutex<BTreeMap<String, String>>,
}

impl FileStorage {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Ignoring malformed storage file"
                );
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };

        tracing::debug!(path = %path.display(), keys = items.len(), "Opened file storage");

        Self {
            path,
            items: Mutex::new(items),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, items: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                ClientError::Storage(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let contents = serde_json::to_string_pretty(items)
            .map_err(|e| ClientError::Storage(format!("Failed to encode storage: {}", e)))?;
        fs::write(&self.path, contents).map_err(|e| {
            ClientError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock();
        items.insert(key.to_string(), value.to_string());
        self.flush(&items)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.lock();
        if items.remove(key).is_some() {
            self.flush(&items)?;
        }
        Ok(())
    }
}

/// `window.localStorage`, looked up on every call.
#[cfg(feature = "browser")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

#[cfg(feature = "browser")]
impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| ClientError::Storage("No window available".to_string()))?;
        window
            .local_storage()
            .map_err(|e| ClientError::Storage(format!("localStorage unavailable: {:?}", e)))?
            .ok_or_else(|| ClientError::Storage("localStorage unavailable".to_string()))
    }
}

#[cfg(feature = "browser")]
impl Storage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::local_storage().ok()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| ClientError::Storage(format!("setItem({}) failed: {:?}", key, e)))
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|e| ClientError::Storage(format!("removeItem({}) failed: {:?}", key, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("moduway-storage-{}", uuid::Uuid::new_v4()))
            .join("local_storage.json")
    }

    #[test]
    fn test_memory_storage_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item(AUTH_TOKEN_KEY), None);

        storage.set_item(AUTH_TOKEN_KEY, "abc").unwrap();
        assert_eq!(storage.get_item(AUTH_TOKEN_KEY).as_deref(), Some("abc"));

        storage.remove_item(AUTH_TOKEN_KEY).unwrap();
        assert_eq!(storage.get_item(AUTH_TOKEN_KEY), None);

        // Removing twice is fine
        storage.remove_item(AUTH_TOKEN_KEY).unwrap();
    }

    #[test]
    fn test_file_storage_persists_across_reopen() {
        let path = temp_path();

        let storage = FileStorage::open(&path);
        storage.set_item(AUTH_TOKEN_KEY, "token-1").unwrap();
        storage.set_item(COMPARISON_ITEMS_KEY, "[]").unwrap();
        drop(storage);

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get_item(AUTH_TOKEN_KEY).as_deref(), Some("token-1"));
        assert_eq!(reopened.get_item(COMPARISON_ITEMS_KEY).as_deref(), Some("[]"));

        reopened.remove_item(AUTH_TOKEN_KEY).unwrap();
        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get_item(AUTH_TOKEN_KEY), None);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let storage = FileStorage::open(temp_path());
        assert_eq!(storage.get_item(AUTH_TOKEN_KEY), None);
    }

    #[test]
    fn test_file_storage_malformed_file_is_empty() {
        let path = temp_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let storage = FileStorage::open(&path);
        assert_eq!(storage.get_item(AUTH_TOKEN_KEY), None);

        // Next write replaces the garbage
        storage.set_item(AUTH_TOKEN_KEY, "t").unwrap();
        assert_eq!(FileStorage::open(&path).get_item(AUTH_TOKEN_KEY).as_deref(), Some("t"));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
