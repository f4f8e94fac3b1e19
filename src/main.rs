//! Calculator service entry point.
//!
//! Loads configuration from a TOML file, initializes tracing, builds the Axum
//! router and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use calculator_service::config::{AppConfig, DEFAULT_CONFIG_PATH};
use calculator_service::http::start_server;
use calculator_service::{create_router, AppState};

/// Calculator service: a REST API that adds numbers
#[derive(Parser, Debug)]
#[command(name = "calculator-service", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "calculator_service=debug,info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration (file, then PORT/APP_ENV/LOG_LEVEL overrides)
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > config
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| config.logging.level.clone());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        config = %args.config,
        environment = %config.http.environment,
        "Loaded configuration"
    );

    let state = AppState::new(config.clone());
    let app = create_router(state);

    start_server(app, &config).await?;

    Ok(())
}
