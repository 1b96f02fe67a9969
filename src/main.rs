//! Serverless API demo server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id ─▶ trace ─▶ timeout ─▶ metrics ─▶ router
//!                                                                   │
//!                    ┌──────────┬──────────┬──────────┬──────────┬─┘
//!                    ▼          ▼          ▼          ▼          ▼
//!                 /api       /api/hello /api/status /api/time /api/users
//!                 (index)                                       (mock db)
//!
//!     Cross-cutting: config (TOML + VERCEL_* env), tracing logs,
//!     Prometheus metrics, graceful shutdown on SIGINT/SIGTERM.
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use serverless_api::config::{config_from_env, load_config};
use serverless_api::lifecycle::{signals, Shutdown};
use serverless_api::observability::{logging, metrics};
use serverless_api::HttpServer;

#[derive(Parser)]
#[command(name = "serverless-api")]
#[command(about = "GET-only JSON demo API", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "API_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => config_from_env()?,
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability);

    tracing::info!("serverless-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        environment = %config.deployment.environment,
        region = %config.deployment.region,
        base_url = %config.deployment.base_url(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
