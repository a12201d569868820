//! Unified error types for the gateway.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Unified error type for the gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Database credentials missing or empty.
    #[error("client configuration error: {0}")]
    ClientConfig(#[from] ConfigError),

    /// Database execution error.
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    /// Request validation error.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Missing database credentials, detected when a client handle is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Database URL absent or empty after trimming.
    #[error("missing URL")]
    MissingUrl,

    /// Auth token absent or empty after trimming.
    #[error("missing token")]
    MissingToken,
}

/// Errors from executing a statement against the remote database.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The HTTP request to the database could not be completed.
    #[error("database request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The database answered with a non-success HTTP status.
    #[error("database returned HTTP {status}: {body}")]
    HttpStatus {
        /// Status code returned by the database server.
        status: reqwest::StatusCode,
        /// Response body, as text.
        body: String,
    },

    /// The statement itself was rejected by the database.
    #[error("statement failed: {0}")]
    Statement(String),

    /// The database response did not match the expected wire shape.
    #[error("failed to parse database response: {0}")]
    Parse(String),
}

/// Query-parameter validation failures.
///
/// The `Display` strings are a public contract: clients match on the exact
/// 400 body text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent from the query string.
    #[error("Missing {0}")]
    Missing(&'static str),

    /// Required field supplied more than once.
    #[error("{0} must be a single string")]
    MultiValued(&'static str),

    /// Required field present but empty.
    #[error("{0} length must be > 0")]
    Empty(&'static str),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(e) => e.into_response(),
            other => {
                // Config and read-query failures are not recovered; they
                // surface as a generic 500 like any unhandled error would.
                error!("request failed: {other}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, GatewayError>;
