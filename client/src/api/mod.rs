//! # Backend API Client Module
//!
//! HTTP client for the course-discovery backend (`/api/v1`). One method per
//! endpoint; each maps path/query/body to a single call and hands back the
//! raw response.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and documentation
//! ├── client.rs       - ApiClient, RequestOptions, ApiResponse
//! ├── auth.rs         - Accounts (login, social login, registration, logout, user, password)
//! ├── courses.rs      - Catalog, reviews, recommendations, review summary, search
//! ├── community.rs    - Boards, posts, comments, likes, scraps
//! ├── mypage.rs       - Dashboard, enrollments, wishlist, ratings, activity, profile
//! └── comparisons.rs  - Comparison analysis, AI review
//! ```

pub mod auth;
pub mod client;
pub mod community;
pub mod comparisons;
pub mod courses;
pub mod mypage;

pub use client::{ApiClient, ApiResponse, RequestOptions};
