//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{add_playlist, add_user, list_playlists, list_users, not_found, AppState};

/// Create the API router.
///
/// Only GET is registered per route; any other method or path falls through
/// to the 404 catch-all, like a GET-only route table with a wildcard default.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list_users).fallback(not_found))
        .route("/playlists", get(list_playlists).fallback(not_found))
        .route("/add-user", get(add_user).fallback(not_found))
        .route("/add-playlist", get(add_playlist).fallback(not_found))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
