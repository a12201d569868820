//! Integration tests for the libsql gateway.
//!
//! These tests require LIBSQL_DB_URL and LIBSQL_DB_AUTH_TOKEN pointing at a
//! real database with the `users` and `playlists` tables.
//! Run with: cargo test --test integration -- --ignored
//!
//! Note: These tests interact with a real libsql server.

use libsql_gateway::config::Config;
use libsql_gateway::database::{Database, LibsqlClient, Statement};

/// Get a test config from environment.
fn test_config() -> Option<Config> {
    dotenvy::dotenv().ok();

    let config = Config::load().ok()?;
    if !config.has_database_credentials() {
        return None;
    }

    Some(config)
}

/// Test that a client can be built from real credentials.
#[tokio::test]
#[ignore = "requires LIBSQL_DB_URL and LIBSQL_DB_AUTH_TOKEN"]
async fn builds_client_from_env() {
    let config = match test_config() {
        Some(c) => c,
        None => {
            println!("Skipping: LIBSQL_DB_URL / LIBSQL_DB_AUTH_TOKEN not set");
            return;
        }
    };

    let client = LibsqlClient::from_config(&config).unwrap();
    assert!(client.url().starts_with("http"));
}

/// Test that the users table can be read end to end.
#[tokio::test]
#[ignore = "requires LIBSQL_DB_URL and LIBSQL_DB_AUTH_TOKEN"]
async fn selects_users() {
    let config = match test_config() {
        Some(c) => c,
        None => {
            println!("Skipping: LIBSQL_DB_URL / LIBSQL_DB_AUTH_TOKEN not set");
            return;
        }
    };

    let client = LibsqlClient::from_config(&config).unwrap();
    let rowset = client
        .execute(Statement::new("select * from users"))
        .await
        .unwrap();

    // Schema, not content: the table exists and has the expected columns.
    assert!(rowset.columns.iter().any(|c| c == "email"));
    assert!(rowset.columns.iter().any(|c| c == "name"));
}

/// Test that a bad statement surfaces as a statement error.
#[tokio::test]
#[ignore = "requires LIBSQL_DB_URL and LIBSQL_DB_AUTH_TOKEN"]
async fn statement_errors_are_reported() {
    let config = match test_config() {
        Some(c) => c,
        None => {
            println!("Skipping: LIBSQL_DB_URL / LIBSQL_DB_AUTH_TOKEN not set");
            return;
        }
    };

    let client = LibsqlClient::from_config(&config).unwrap();
    let result = client
        .execute(Statement::new("select * from no_such_table_hopefully"))
        .await;

    assert!(result.is_err());
}
