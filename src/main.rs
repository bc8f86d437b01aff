mod domain;
mod clients;
mod config;
mod http;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod user_actor;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};
use crate::app_system::{UserSystem, setup_tracing};
use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    // Setup tracing once for the entire application
    setup_tracing();

    info!(buffer_size = config.buffer_size, "Starting user store");
    let system = UserSystem::new(config.buffer_size);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %listener.local_addr()?, "Server running");

    http::serve(listener, system.user_client.clone(), shutdown_signal())
        .await
        .context("HTTP server failed")?;

    // The router and its client clones are gone once serve returns
    system.shutdown().await.map_err(anyhow::Error::msg)?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await
        }
    }
}
