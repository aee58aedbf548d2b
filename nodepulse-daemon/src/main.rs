//! NodePulse daemon.
//!
//! A long-lived foreground process: loads credentials, brings up one
//! session per account through the session pool, then waits for
//! SIGINT/SIGTERM. The only error allowed to abort startup is a missing
//! or empty credential file.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nodepulse_core::modules::credentials::load_credentials;
use nodepulse_core::{ApiClient, ApiEndpoints, SessionPool};
use nodepulse_types::SessionConfig;

mod cli;

const BANNER: &str = r"
    _  __        __    ___       __
   / |/ /__  ___/ /__ / _ \__ __/ /__ ___
  /    / _ \/ _  / -_) ___/ // / (_-</ -_)
 /_/|_/\___/\_,_/\__/_/   \_,_/_/___/\__/
";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let filter =
        EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("{BANNER}");
    info!("Starting NodePulse...");

    let credentials = load_credentials(&cli.tokens)
        .await
        .with_context(|| format!("cannot load credentials from {}", cli.tokens.display()))?;

    let config = SessionConfig {
        ping_interval_secs: cli.ping_interval_secs,
        startup_stagger_secs: cli.startup_stagger_secs,
        proxy_dir: cli.proxy_dir,
    };

    let client = Arc::new(ApiClient::new().map_err(anyhow::Error::msg)?);
    let endpoints = ApiEndpoints::resolve();

    let mut pool = SessionPool::new(client, endpoints, config);
    let started = pool.start(credentials).await;
    info!(started, "All sessions launched");

    shutdown_signal().await;
    pool.shutdown();
    pool.join().await;
    info!("NodePulse stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl+C or (on unix) SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        () = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}
