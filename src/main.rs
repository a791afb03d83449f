use std::error::Error;
use std::sync::Arc;

use quill::config::Config;
use quill::{catalog, handlers, microsvc, Site};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load()?;

    info!("Seeding reference data...");
    let site = Site::in_memory();
    catalog::seed(site.store(), &config.genres, &config.search_keys)?;

    let service = Arc::new(handlers::service(site));
    info!("Starting server on {}", config.address());
    microsvc::serve(service, &config.address(), shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
