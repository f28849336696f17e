//! # Core Abstractions
//!
//! Core traits and error types shared by every other module.
//!
//! - **[`error`]**: Client error type (`ClientError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`AccountService`)
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use moduway::core::service::AccountService;
//! use moduway::{ApiClient, AuthStore, ClientConfig, MemoryStorage, Storage};
//!
//! # async fn run() -> moduway::Result<()> {
//! let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
//! let api = ApiClient::new(&ClientConfig::default(), storage.clone())?;
//! let auth = AuthStore::new(storage);
//!
//! // The real HTTP client in production; tests hand in a fake
//! auth.logout(Some(&api as &dyn AccountService)).await;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod service;

pub use error::{ClientError, Result};
pub use service::AccountService;
