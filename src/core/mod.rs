//! Core module containing the product entity, its validation and the store seam

pub mod error;
pub mod product;
pub mod query;
pub mod service;
pub mod store;
pub mod validation;

pub use error::{CatalogError, CatalogResult, ValidationError};
pub use product::{Price, Product};
pub use query::{ListParams, ProductFilter};
pub use service::ProductService;
pub use store::ProductStore;
pub use validation::FieldLimits;
