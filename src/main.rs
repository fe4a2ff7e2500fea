//! Greeter: a greeting web service for container deployments.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from a TOML file, sets up the Axum router, and starts the
//! HTTP server with graceful shutdown.

mod config;
mod http;
mod middleware;
mod routes;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use routes::create_router;

/// Greeter: a greeting web service for container deployments
#[derive(Parser, Debug)]
#[command(name = "greeter", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "greeter=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration; a missing file means built-in defaults
    let config_existed = std::path::Path::new(&args.config).exists();
    let config = AppConfig::load_or_default(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let env_filter = tracing_subscriber::EnvFilter::new(&log_filter);
    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    if config_existed {
        tracing::info!(path = %args.config, "Loaded configuration");
    } else {
        tracing::info!(path = %args.config, "No config file found, using defaults");
    }

    // Create router
    let app = create_router();

    // Start server; blocks until shutdown
    http::start_server(app, &config).await?;

    Ok(())
}
