//! HTTP client for the remote libsql database.

use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::{ConfigError, DatabaseError};
use crate::metrics;

use super::types::{
    PipelineCall, PipelineOk, PipelineRequest, PipelineResponse, PipelineResult, RowSet, Statement,
};

/// Anything capable of executing a parameterized statement and returning rows.
///
/// The gateway handlers only see this trait, so tests can swap in
/// [`MockDatabase`](super::mock::MockDatabase).
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute one statement and return its result set.
    async fn execute(&self, stmt: Statement) -> Result<RowSet, DatabaseError>;
}

/// Client for a libsql server speaking the HTTP pipeline protocol.
#[derive(Debug, Clone)]
pub struct LibsqlClient {
    /// HTTP client for pipeline requests.
    http: reqwest::Client,
    /// Normalized base URL (https), without trailing slash.
    url: String,
    /// Bearer token for the database.
    auth_token: String,
}

impl LibsqlClient {
    /// Build a client from configuration.
    ///
    /// Both values are trimmed; an absent or empty URL fails before the
    /// token is looked at.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let url = config
            .libsql_db_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingUrl)?;

        let auth_token = config
            .libsql_db_auth_token
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        Ok(Self::new(url, auth_token, config.http_timeout_ms))
    }

    /// Create a client bound to the given URL and token.
    pub fn new(url: &str, auth_token: &str, timeout_ms: u64) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(timeout_ms))
            .connect_timeout(std::time::Duration::from_secs(5))
            .tcp_nodelay(true)
            .tcp_keepalive(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            url: http_url(url),
            auth_token: auth_token.to_string(),
        }
    }

    /// Get the normalized base URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Rewrite libsql/websocket schemes to their HTTP equivalents and strip any
/// trailing slash.
fn http_url(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    match trimmed.split_once("://") {
        Some(("libsql" | "wss", rest)) => format!("https://{rest}"),
        Some(("ws", rest)) => format!("http://{rest}"),
        _ => trimmed.to_string(),
    }
}

#[async_trait]
impl Database for LibsqlClient {
    #[instrument(skip(self), fields(sql = %stmt.sql))]
    async fn execute(&self, stmt: Statement) -> Result<RowSet, DatabaseError> {
        let url = format!("{}/v2/pipeline", self.url);
        let body = PipelineRequest {
            requests: vec![PipelineCall::Execute { stmt: &stmt }, PipelineCall::Close],
        };

        let start = Instant::now();
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.auth_token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            metrics::inc_queries_failed();
            return Err(DatabaseError::HttpStatus { status, body });
        }

        let pipeline: PipelineResponse = response.json().await.map_err(|e| {
            metrics::inc_queries_failed();
            DatabaseError::Parse(format!("invalid pipeline response: {e}"))
        })?;

        let rowset = match pipeline.results.into_iter().next() {
            Some(PipelineResult::Ok {
                response: PipelineOk::Execute { result },
            }) => RowSet::from(result),
            Some(PipelineResult::Error { error }) => {
                metrics::inc_queries_failed();
                return Err(DatabaseError::Statement(error.message));
            }
            _ => {
                metrics::inc_queries_failed();
                return Err(DatabaseError::Parse(
                    "pipeline response missing execute result".to_string(),
                ));
            }
        };

        metrics::record_query_latency(start);
        metrics::inc_queries_executed();
        debug!(
            rows = rowset.rows.len(),
            rows_affected = rowset.rows_affected,
            "statement executed"
        );

        Ok(rowset)
    }
}
