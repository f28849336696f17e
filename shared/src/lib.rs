//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the Moduway client and the backend API.
//! All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, registration, social login and password change
//!   - **[`dto::course`]**: Course catalog, search parameters and reviews
//!   - **[`dto::community`]**: Boards, posts and comments
//!   - **[`dto::mypage`]**: Personal dashboard, wishlist, reviews and profile
//!   - **[`dto::comparison`]**: Side-by-side course analysis requests
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None`
//!   (`#[serde(skip_serializing_if = "Option::is_none")]`)
//! - Query parameter sets serialize through the same derive, so an unset filter
//!   never shows up in the query string
//! - Response types tolerate fields they do not know about
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::auth::{LoginRequest, TokenResponse};
//!
//! let request = LoginRequest::with_username("alice", "secret");
//!
//! let response: TokenResponse = reqwest::Client::new()
//!     .post("http://localhost:8000/api/v1/accounts/login/")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//!
//! println!("token: {}", response.key);
//! ```

pub mod dto;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
