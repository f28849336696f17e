//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the client and backend via the REST API (`/api/v1`).
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration, social login, user details
//! - [`course`] - Course list/search parameters, course and review shapes
//! - [`community`] - Boards, posts, comments
//! - [`mypage`] - Dashboard statistics, enrollment filters, reviews, profile
//! - [`comparison`] - Comparison analysis request
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/v1/accounts/login/
//! Content-Type: application/json
//!
//! {
//!   "username": "alice",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "key": "9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b"
//! }
//! ```

pub mod auth;
pub mod community;
pub mod comparison;
pub mod course;
pub mod mypage;

pub use auth::*;
pub use community::*;
pub use comparison::*;
pub use course::*;
pub use mypage::*;

use serde::{Deserialize, Serialize};

/// Page envelope returned by every paginated list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}
