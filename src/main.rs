//! Vitals: a health endpoint server.
//!
//! This is the application entry point. It parses arguments, loads
//! configuration from a TOML file, initializes tracing, sets up the Axum
//! router and starts the HTTP server.

use clap::Parser;

use vitals::config::{AppConfig, DEFAULT_CONFIG_PATH};
use vitals::http::start_server;
use vitals::logging::{init_tracing, resolve_filter};
use vitals::{create_router, AppState};

/// Vitals: A liveness/readiness health endpoint
#[derive(Parser, Debug)]
#[command(name = "vitals", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "vitals=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = AppConfig::load(&args.config)?;

    let log_filter = resolve_filter(args.log_level);
    init_tracing(&log_filter, config.logging.format)?;

    tracing::info!(
        config = %args.config,
        path = %config.health.path,
        environment_var = %config.health.environment_var,
        version_var = %config.health.version_var,
        "Loaded configuration"
    );

    let state = AppState::from_config(config.clone());
    let app = create_router(state);

    start_server(app, &config).await?;

    Ok(())
}
