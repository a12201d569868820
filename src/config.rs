//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Database Credentials ===
    /// URL of the remote libsql database (e.g. `libsql://db-org.turso.io`).
    ///
    /// Optional at load time: absence is only an error once a request
    /// actually needs a database handle.
    #[serde(default)]
    pub libsql_db_url: Option<String>,

    /// Authentication token for the database.
    #[serde(default)]
    pub libsql_db_auth_token: Option<String>,

    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,

    // === HTTP Client Tuning ===
    /// Timeout for database requests, in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    // === Metrics ===
    /// Enable the Prometheus metrics exporter.
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    /// Port for the Prometheus metrics exporter.
    #[serde(default = "default_metrics_port")]
    pub metrics_port: u16,
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_http_timeout_ms() -> u64 {
    30_000
}

fn default_true() -> bool {
    true
}

fn default_metrics_port() -> u16 {
    9090
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.http_timeout_ms == 0 {
            return Err("HTTP_TIMEOUT_MS must be greater than 0".to_string());
        }

        if self.metrics_enabled && self.metrics_port == self.port {
            return Err("METRICS_PORT must differ from PORT".to_string());
        }

        Ok(())
    }

    /// Check whether both database credentials are present (after trimming).
    pub fn has_database_credentials(&self) -> bool {
        let present = |v: &Option<String>| {
            v.as_deref().map(str::trim).is_some_and(|s| !s.is_empty())
        };
        present(&self.libsql_db_url) && present(&self.libsql_db_auth_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn test_config() -> Config {
        Config {
            libsql_db_url: Some("libsql://gateway-test.turso.io".to_string()),
            libsql_db_auth_token: Some("token-123".to_string()),
            port: default_port(),
            rust_log: default_log_level(),
            verbose: false,
            http_timeout_ms: default_http_timeout_ms(),
            metrics_enabled: true,
            metrics_port: default_metrics_port(),
        }
    }

    #[test]
    fn default_values_are_sensible() {
        assert_eq!(default_port(), 8080);
        assert_eq!(default_metrics_port(), 9090);
        assert_eq!(default_log_level(), "info");
        assert!(default_http_timeout_ms() > 0);
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let config = Config {
            http_timeout_ms: 0,
            ..test_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_metrics_port_clash() {
        let config = Config {
            metrics_port: 8080,
            ..test_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn credentials_presence_requires_non_whitespace() {
        let mut config = test_config();
        assert!(config.has_database_credentials());

        config.libsql_db_auth_token = Some("   ".to_string());
        assert!(!config.has_database_credentials());

        config.libsql_db_auth_token = None;
        assert!(!config.has_database_credentials());
    }
}
