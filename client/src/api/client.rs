//! # API Client
//!
//! The single request-issuing object every endpoint goes through.

use std::fmt::Display;
use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::core::error::{ClientError, Result};
use crate::storage::{Storage, AUTH_TOKEN_KEY};

/// Query string and JSON body for one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub params: Option<Value>,
    pub data: Option<Value>,
}

impl RequestOptions {
    pub fn none() -> Self {
        Self::default()
    }

    /// Query parameters from any serializable struct or map. Fields skipped by
    /// serde never reach the query string.
    pub fn params<P: Serialize + ?Sized>(params: &P) -> Result<Self> {
        Ok(Self {
            params: Some(serde_json::to_value(params)?),
            data: None,
        })
    }

    pub fn data<D: Serialize + ?Sized>(data: &D) -> Result<Self> {
        Ok(Self {
            params: None,
            data: Some(serde_json::to_value(data)?),
        })
    }
}

/// Successful response, passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    /// Raw JSON body; `Null` when the body was empty.
    pub data: Value,
}

impl ApiResponse {
    /// Decode the body into a typed DTO without consuming the response.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(T::deserialize(&self.data)?)
    }

    pub fn into_json<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(self.data)?)
    }
}

/// HTTP client for the backend REST API.
///
/// Base URL and the `Content-Type: application/json` header are fixed at
/// construction. Every request reads the session token from the storage port
/// and, when one is present, sends `Authorization: Token <value>`.
/// Non-2xx responses become [`ClientError::Status`]; nothing is retried.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    storage: Arc<dyn Storage>,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// A timeout is only installed when the configuration sets one.
    pub fn new(config: &ClientConfig, storage: Arc<dyn Storage>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url().to_string(),
            storage,
        })
    }

    /// Get the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    fn authorization(&self) -> Option<String> {
        self.storage
            .get_item(AUTH_TOKEN_KEY)
            .filter(|token| !token.is_empty())
            .map(|token| format!("Token {}", token))
    }

    /// Issue one request against `base_url + path`.
    #[tracing::instrument(skip_all, fields(method = %method, path = %path))]
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        let start = Instant::now();

        let mut builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));

        if let Some(auth) = self.authorization() {
            builder = builder.header(AUTHORIZATION, auth);
        }
        if let Some(params) = &options.params {
            builder = builder.query(params);
        }
        if let Some(data) = &options.data {
            builder = builder.json(data);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, "Request network error");
            ClientError::Transport(e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await?;
        let data = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        let duration_ms = start.elapsed().as_millis() as u64;

        if status.is_success() {
            tracing::debug!(status = status.as_u16(), duration_ms, "Request completed");
            Ok(ApiResponse { status, data })
        } else {
            tracing::warn!(status = status.as_u16(), duration_ms, "Request failed");
            Err(ClientError::Status { status, body: data })
        }
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.request(Method::GET, path, RequestOptions::none())
            .await
    }

    pub async fn get_with<P: Serialize + ?Sized>(
        &self,
        path: &str,
        params: &P,
    ) -> Result<ApiResponse> {
        self.request(Method::GET, path, RequestOptions::params(params)?)
            .await
    }

    /// POST without a body.
    pub async fn post_empty(&self, path: &str) -> Result<ApiResponse> {
        self.request(Method::POST, path, RequestOptions::none())
            .await
    }

    pub async fn post<D: Serialize + ?Sized>(&self, path: &str, data: &D) -> Result<ApiResponse> {
        self.request(Method::POST, path, RequestOptions::data(data)?)
            .await
    }

    pub async fn put<D: Serialize + ?Sized>(&self, path: &str, data: &D) -> Result<ApiResponse> {
        self.request(Method::PUT, path, RequestOptions::data(data)?)
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.request(Method::DELETE, path, RequestOptions::none())
            .await
    }
}

/// Percent-encode one path segment (board names may be non-ASCII).
pub(crate) fn segment(value: impl Display) -> String {
    urlencoding::encode(&value.to_string()).into_owned()
}
