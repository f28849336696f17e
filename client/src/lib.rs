//! # Moduway Client - Library Root
//!
//! Client layer for the Moduway course-discovery and community service: the
//! HTTP client over the backend REST API, the shared state stores and the
//! route table. The `moduway` binary (`main.rs`) is a thin command-line
//! front end over this crate.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              moduway (this crate)                      │
//! ├────────────────────────────────────────────────────────┤
//! │  context   - AppContext: config + storage + api + stores│
//! │  stores    - AuthStore, ComparisonStore (watch cells)  │
//! │  api       - ApiClient, one method per endpoint        │
//! │  router    - Static route table                        │
//! │  storage   - Local-storage port (memory/file/browser)  │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (Authorization: Token <key>)
//!          ▼
//! ┌─────────────────┐
//! │  Backend API    │
//! │  /api/v1        │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **api**: Backend HTTP client, split by resource (auth, courses,
//!   community, mypage, comparisons)
//! - **core**: Error type and service traits
//! - **stores**: Session and comparison basket state
//! - **router**: Path patterns to pages
//! - **storage**: Key-value persistence port
//! - **notify**: User-facing alerts
//! - **config** / **logging**: Environment configuration and tracing setup
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use moduway::{AppContext, ClientConfig, LogNotifier, MemoryStorage};
//! use shared::LoginRequest;
//!
//! # async fn run() -> moduway::Result<()> {
//! let ctx = AppContext::new(
//!     ClientConfig::default(),
//!     Arc::new(MemoryStorage::new()),
//!     Arc::new(LogNotifier),
//! )?;
//!
//! ctx.sign_in(&LoginRequest::with_username("alice", "secret")).await?;
//! let boards = ctx.api.get_boards().await?;
//! println!("{}", boards.data);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod context;
pub mod core;
pub mod logging;
pub mod notify;
pub mod router;
pub mod storage;
pub mod stores;

pub use api::{ApiClient, ApiResponse, RequestOptions};
pub use config::ClientConfig;
pub use context::AppContext;
pub use crate::core::error::{ClientError, Result};
pub use notify::{LogNotifier, Notifier};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use stores::{AuthStore, ComparisonItem, ComparisonStore, Session};
