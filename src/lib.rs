//! HTTP gateway for a remote libsql database.
//!
//! The gateway exposes four routes backed by parameterized SQL against a
//! libsql server reached over its HTTP pipeline protocol:
//!
//! - `GET /users` — full `users` table as JSON (CORS-enabled)
//! - `GET /playlists` — full `playlists` table as JSON
//! - `GET /add-user?email=..&name=..` — insert a user row
//! - `GET /add-playlist?owner_id=..&payload=..` — insert a playlist row
//!
//! Anything else answers 404. Query parameters are validated for presence,
//! single-valuedness, and non-emptiness before any statement is built; user
//! input is only ever passed as bound positional arguments, never spliced
//! into SQL text.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`database`]: libsql HTTP client, wire types, and test mock
//! - [`api`]: Router, handlers, and query-parameter validation
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod database;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{GatewayError, Result};
