//! # Client Configuration
//!
//! Configuration loaded from environment variables. The binary loads `.env`
//! through `dotenvy` before calling [`ClientConfig::from_env`].
//!
//! | Variable                       | Default                          |
//! |--------------------------------|----------------------------------|
//! | `MODUWAY_API_BASE_URL`         | `http://localhost:8000/api/v1`   |
//! | `MODUWAY_STORAGE_PATH`         | `data/local_storage.json`        |
//! | `MODUWAY_REQUEST_TIMEOUT_SECS` | unset (transport default)        |
//! | `GOOGLE_CLIENT_ID`             | unset                            |
//! | `RUST_LOG`                     | `moduway=info,warn`              |
//! | `MODUWAY_LOG_DIR`              | unset (stderr only)              |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::{ClientError, Result};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_STORAGE_PATH: &str = "data/local_storage.json";
pub const DEFAULT_LOG_LEVEL: &str = "moduway=info,warn";

/// Client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend API root, including the `/api/v1` prefix
    pub api_base_url: String,

    /// File backing the local-storage port on native targets
    pub storage_path: PathBuf,

    /// Per-request timeout. `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,

    /// Client identifier for the Google sign-in widget
    pub google_client_id: Option<String>,

    /// `EnvFilter` directive string
    pub log_level: String,

    /// Directory for rolling log files
    pub log_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            request_timeout: None,
            google_client_id: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("MODUWAY_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let storage_path = env::var("MODUWAY_STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_PATH));

        let request_timeout = match env::var("MODUWAY_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e| {
                    ClientError::Config(format!(
                        "MODUWAY_REQUEST_TIMEOUT_SECS must be a whole number of seconds: {}",
                        e
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        let google_client_id = env::var("GOOGLE_CLIENT_ID")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        let log_dir = env::var("MODUWAY_LOG_DIR").ok().map(PathBuf::from);

        let config = Self {
            api_base_url,
            storage_path,
            request_timeout,
            google_client_id,
            log_level,
            log_dir,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.api_base_url).map_err(|e| {
            ClientError::Config(format!(
                "MODUWAY_API_BASE_URL is not a valid URL ({}): {}",
                self.api_base_url, e
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "MODUWAY_API_BASE_URL must use http or https, got {}",
                url.scheme()
            )));
        }

        if self.request_timeout == Some(Duration::ZERO) {
            return Err(ClientError::Config(
                "MODUWAY_REQUEST_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Base URL without a trailing slash, ready for `format!("{}{}", base, path)`.
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url(), "http://localhost:8000/api/v1");
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let config = ClientConfig {
            api_base_url: "https://api.example.com/api/v1/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.base_url(), "https://api.example.com/api/v1");
    }

    #[test]
    fn test_validate_rejects_relative_url() {
        let config = ClientConfig {
            api_base_url: "/api/v1".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ClientError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let config = ClientConfig {
            api_base_url: "ftp://example.com/api/v1".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ClientError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = ClientConfig {
            request_timeout: Some(Duration::ZERO),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
