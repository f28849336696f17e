//! # Common Error Types
//!
//! Consolidated error handling for the client layer.
//!
//! ## Error Categories
//!
//! - **Transport**: The request never produced a response (connect, DNS, body read)
//! - **Status**: The backend answered with a non-2xx status; the body is kept as-is
//! - **Decode**: A response did not match the typed shape the caller asked for
//! - **Storage**: The persistence port failed to read or write
//! - **Config**: Invalid configuration at startup
//!
//! There is no retry, backoff or domain classification on top of these. Callers
//! decide what to show.
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use moduway::core::error::ClientError;
//!
//! # async fn run(api: &moduway::api::ApiClient) {
//! match api.get_profile().await {
//!     Ok(response) => println!("{}", response.data),
//!     Err(ClientError::Status { status, body }) => eprintln!("{status}: {body}"),
//!     Err(other) => eprintln!("{other}"),
//! }
//! # }
//! ```

use reqwest::StatusCode;
use thiserror::Error;

/// Client-wide error type.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure before any response arrived.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response. `body` is the raw JSON payload, or a JSON string
    /// holding the text when the backend did not answer with JSON.
    #[error("HTTP {status}: {body}")]
    Status {
        status: StatusCode,
        body: serde_json::Value,
    },

    /// Response body did not match the requested type.
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Persistence port failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status of the failed response, if the backend answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display_includes_body() {
        let err = ClientError::Status {
            status: StatusCode::BAD_REQUEST,
            body: serde_json::json!({ "detail": "nope" }),
        };
        assert_eq!(err.to_string(), r#"HTTP 400 Bad Request: {"detail":"nope"}"#);
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_non_http_errors_have_no_status() {
        assert_eq!(ClientError::Storage("disk full".to_string()).status(), None);
        assert_eq!(
            ClientError::Config("bad url".to_string()).to_string(),
            "Configuration error: bad url"
        );
    }
}
