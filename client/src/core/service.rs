//! # Service Traits
//!
//! Traits for dependency injection, so stores can be exercised against a fake
//! backend.

use async_trait::async_trait;

use crate::api::ApiResponse;
use crate::core::error::Result;

/// Backend calls a store may issue on its own.
///
/// `ApiClient` is the production implementation.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Invalidate the current token on the backend.
    async fn logout(&self) -> Result<ApiResponse>;
}
