//! Server module for building the catalog HTTP server
//!
//! - [`handlers`]: one axum handler per endpoint
//! - [`router`]: route table, fallbacks and tower layers
//! - [`builder`]: `ServerBuilder`, which wires a store into the router and serves it

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;
pub use router::build_router;
