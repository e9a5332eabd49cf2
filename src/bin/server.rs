/*!
 * HTTP API server over the interview-problem catalogue.
 */

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use prepbot::api;
use prepbot::app_config::{Config, LogLevel};
use prepbot::catalog::load_dir;

#[derive(Parser)]
#[command(name = "prepbot-server", about = "Interview problem statistics API", version)]
struct Cli {
    /// Listen port (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Dataset directory (overrides DATA_DIR)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace (overrides LOG_LEVEL)
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level.parse::<LogLevel>().context("Invalid log level")?;
    }
    prepbot::logging::init(config.log_level.to_level_filter());

    let store = Arc::new(
        load_dir(&config.data_dir)
            .with_context(|| format!("Failed to load dataset from {}", config.data_dir.display()))?,
    );
    info!("Loaded {} companies", store.company_count());

    let app = api::router(store);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await
        .context("Server error")?;
    Ok(())
}
