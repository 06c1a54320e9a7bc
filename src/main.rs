mod actor_framework;
mod api;
mod app_system;
mod clients;
mod config;
mod domain;
mod product_actor;
mod validation;

#[cfg(test)]
mod mock_framework;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::api::{create_router, AppState};
use crate::app_system::{setup_tracing, AppError, ProductSystem};
use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = ServerConfig::parse();

    // Setup tracing once for the entire application
    setup_tracing(&config.log_level);

    info!(?config, "Starting product API");

    let system = ProductSystem::start(config.mailbox_capacity, config.seed()).await?;
    let app = create_router(AppState::new(system.product_client.clone()));

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
