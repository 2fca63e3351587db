//! oms-hello: greeting and health endpoints for the marketplace OMS.
//!
//! This is the application entry point. It parses the command line, loads
//! configuration, initializes tracing, builds the router once and serves it
//! until SIGTERM/SIGINT. Any startup failure is printed to stderr and exits
//! with status 1.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oms_hello::config::{AppConfig, LoggingConfig, DEFAULT_LOG_FILTER};
use oms_hello::{create_router, start_server};

/// oms-hello: greeting, health check and liveness probe endpoints
#[derive(Parser, Debug)]
#[command(name = "oms-hello", version, about)]
struct Args {
    /// Path to configuration file (default: config/default.toml if present)
    #[arg(short, long)]
    config: Option<String>,

    /// Host to bind, overrides http.host
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overrides http.port
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "oms_hello=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match AppConfig::load_or_default(args.config.as_deref()) {
        Ok(config) => config.with_overrides(args.host, args.port),
        Err(e) => {
            eprintln!("oms-hello: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(args.log_level, &config.logging);
    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        access_log = config.logging.access_log,
        "Loaded configuration"
    );

    let app = create_router(&config);

    if let Err(e) = start_server(app, &config).await {
        eprintln!("oms-hello: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing with filter priority: CLI > RUST_LOG > default.
fn init_tracing(cli_filter: Option<String>, logging: &LoggingConfig) {
    let log_filter = cli_filter
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
