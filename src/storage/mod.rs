//! Storage implementations for different backends

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::InMemoryProductStore;
#[cfg(feature = "postgres")]
pub use postgres::PostgresProductStore;

use crate::config::{StorageBackend, StorageConfig};
use crate::core::ProductStore;
use crate::core::error::{CatalogResult, StorageError};
use std::sync::Arc;

/// Open the backend named in the configuration
pub async fn connect(config: &StorageConfig) -> CatalogResult<Arc<dyn ProductStore>> {
    match config.backend {
        StorageBackend::InMemory => {
            tracing::info!("Using in-memory product store");
            Ok(Arc::new(InMemoryProductStore::new()))
        }
        StorageBackend::Postgres => connect_postgres(config).await,
    }
}

#[cfg(feature = "postgres")]
async fn connect_postgres(config: &StorageConfig) -> CatalogResult<Arc<dyn ProductStore>> {
    let url = config
        .database_url
        .as_deref()
        .ok_or_else(|| StorageError::Connection {
            backend: "postgres".to_string(),
            message: "no database_url configured".to_string(),
        })?;

    tracing::info!(max_connections = config.max_connections, "Connecting to PostgreSQL");
    let store = PostgresProductStore::connect(url, config.max_connections)
        .await
        .map_err(|e| StorageError::Connection {
            backend: "postgres".to_string(),
            message: format!("{:#}", e),
        })?;

    Ok(Arc::new(store))
}

#[cfg(not(feature = "postgres"))]
async fn connect_postgres(_config: &StorageConfig) -> CatalogResult<Arc<dyn ProductStore>> {
    Err(StorageError::Unavailable {
        backend: "postgres".to_string(),
    }
    .into())
}
