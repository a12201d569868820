//! libsql gateway entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use libsql_gateway::api::{create_router, AppState};
use libsql_gateway::config::Config;
use libsql_gateway::database::LibsqlClient;
use libsql_gateway::metrics;
use libsql_gateway::utils::shutdown_signal;

/// HTTP gateway for a remote libsql database.
#[derive(Parser, Debug)]
#[command(name = "libsql-gateway")]
#[command(about = "HTTP gateway exposing read/write endpoints backed by a remote libsql database")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the gateway (default).
    Run {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("libsql_gateway=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Run { port }) => cmd_run(port).await,
        None => cmd_run(args.port).await,
    }
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("LIBSQL GATEWAY - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    print!("Checking database credentials... ");
    match LibsqlClient::from_config(&config) {
        Ok(client) => {
            println!("OK");
            println!("  Database URL: {}", client.url());
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            println!("  (the gateway starts without credentials, but every");
            println!("   database route will fail until they are set)");
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Port: {}", config.port);
    println!("  HTTP Timeout: {}ms", config.http_timeout_ms);
    println!(
        "  Metrics: {}",
        if config.metrics_enabled {
            format!("enabled on port {}", config.metrics_port)
        } else {
            "disabled".to_string()
        }
    );
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the gateway.
async fn cmd_run(port_override: Option<u16>) -> anyhow::Result<()> {
    info!("Loading configuration...");
    let mut config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(port) = port_override {
        config.port = port;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    info!("Configuration loaded successfully");
    if !config.has_database_credentials() {
        // Matches the cold-start behavior of the config store: absence only
        // fails the request that needs a handle, but warn early.
        tracing::warn!(
            "LIBSQL_DB_URL / LIBSQL_DB_AUTH_TOKEN not set; database routes will fail"
        );
    }

    // Initialize metrics
    metrics::init_metrics();
    if config.metrics_enabled {
        let metrics_addr = SocketAddr::from(([0, 0, 0, 0], config.metrics_port));
        PrometheusBuilder::new()
            .with_http_listener(metrics_addr)
            .install()?;
        info!("Metrics exporter listening on {}", metrics_addr);
    }

    // Create app state
    let app_state = AppState::new(config.clone());
    let router = create_router(app_state);

    // Start HTTP server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}
