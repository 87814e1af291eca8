//! Product catalog server
//!
//! Loads configuration (see [`catalog::config`]), opens the configured store
//! and serves the REST API until Ctrl+C or SIGTERM.

use anyhow::Result;
use catalog::config::CatalogConfig;
use catalog::server::ServerBuilder;
use catalog::storage;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = CatalogConfig::load()?;
    let store = storage::connect(&config.storage).await?;

    tracing::info!(
        "Starting {} v{} ({} store)",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        store.backend_name()
    );

    ServerBuilder::new()
        .with_config(config)
        .with_shared_store(store)
        .serve()
        .await
}
