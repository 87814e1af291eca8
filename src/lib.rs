//! # Product Catalog
//!
//! A REST service over a single table of products.
//!
//! ## Features
//!
//! - **Typed validation**: untyped JSON bodies are parsed into [`Product`](core::Product)
//!   values with structured [`ValidationError`](core::ValidationError)s
//! - **Conjunctive filtering**: name, price ceiling and description substring
//! - **Atomic counters**: like/unlike and shelf flags are single store-level updates
//! - **Pluggable storage**: in-memory by default, PostgreSQL behind the `postgres` feature
//! - **YAML + environment configuration**
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use catalog::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_store(InMemoryProductStore::new())
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        CatalogError, CatalogResult, FieldLimits, ListParams, Price, Product, ProductFilter,
        ProductService, ProductStore, ValidationError,
        error::{ConfigError, ErrorResponse, RequestError, StorageError},
    };

    // === Storage ===
    pub use crate::storage::InMemoryProductStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresProductStore;

    // === Config ===
    pub use crate::config::{CatalogConfig, ServerConfig, StorageBackend, StorageConfig};

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
