//! # Warehouse Service
//!
//! Catalogue and warehouse administration REST backend.
//!
//! This is the application entry point that initializes:
//! - Configuration loading
//! - Tracing/logging subsystem
//! - Storage backend (PostgreSQL pool or in-memory)
//! - HTTP server

use anyhow::Result;
use tracing::info;

use warehouse_service::config::Settings;
use warehouse_service::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment and config files
    let settings = Settings::load()?;

    warehouse_service::telemetry::init_tracing(&settings.telemetry);

    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        backend = ?settings.storage.backend,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
