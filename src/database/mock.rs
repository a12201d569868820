//! Mock database for unit testing.
//!
//! This module provides a mock database that records every executed
//! statement, so tests can assert on SQL text and bind order without making
//! real network requests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::error::DatabaseError;

use super::client::Database;
use super::types::{RowSet, Statement};

/// Configuration for mock database behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Whether execute calls should fail.
    pub fail_execute: bool,
    /// Simulated latency in milliseconds.
    pub latency_ms: u64,
}

/// Mock database for testing.
#[derive(Debug, Clone, Default)]
pub struct MockDatabase {
    /// Mock configuration.
    config: MockConfig,
    /// Result set returned by successful executes.
    result: Arc<Mutex<RowSet>>,
    /// Every statement passed to execute, in order.
    executed: Arc<Mutex<Vec<Statement>>>,
}

impl MockDatabase {
    /// Create a new mock with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock with custom configuration.
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Set the result returned by successful executes.
    pub fn set_result(&self, result: RowSet) {
        *self.result.lock().unwrap() = result;
    }

    /// Get the statements executed so far.
    pub fn executed(&self) -> Vec<Statement> {
        self.executed.lock().unwrap().clone()
    }

    /// Clear recorded statements.
    pub fn clear(&self) {
        self.executed.lock().unwrap().clear();
    }
}

#[async_trait]
impl Database for MockDatabase {
    async fn execute(&self, stmt: Statement) -> Result<RowSet, DatabaseError> {
        self.executed.lock().unwrap().push(stmt);

        if self.config.latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.config.latency_ms)).await;
        }

        if self.config.fail_execute {
            return Err(DatabaseError::Statement(
                "Mock execute failure".to_string(),
            ));
        }

        Ok(self.result.lock().unwrap().clone())
    }
}
