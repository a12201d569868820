//! HTTP API module: router, handlers, and query-parameter validation.

pub mod handlers;
pub mod routes;
pub mod validate;

pub use handlers::AppState;
pub use routes::create_router;
