//! Database client, wire types, and test mock.

pub mod client;
pub mod mock;
pub mod types;

pub use client::{Database, LibsqlClient};
pub use types::{RowSet, Statement, Value};
