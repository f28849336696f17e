//! # Client State Stores
//!
//! Shared state mirrored into the storage port:
//!
//! - **auth**: session token and lazily loaded user
//! - **comparison**: basket of up to three courses for side-by-side analysis
//!
//! Both stores publish changes through `tokio::sync::watch`, so any number of
//! views can `subscribe()` and react.

pub mod auth;
pub mod comparison;

pub use auth::{AuthStore, Session};
pub use comparison::{ComparisonItem, ComparisonStore, MAX_COMPARISON_ITEMS};
