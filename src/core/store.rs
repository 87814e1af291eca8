//! Store trait for product persistence

use crate::core::product::Product;
use crate::core::query::ProductFilter;
use anyhow::Result;
use async_trait::async_trait;

/// Persistence backend for products
///
/// Implementations own id assignment and must perform each mutation as a
/// single atomic step: a concurrent `adjust_likes` on the same id may never
/// lose an update. Listing order is ascending id.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Short backend name used in logs
    fn backend_name(&self) -> &'static str;

    /// Insert a product under a freshly assigned id
    ///
    /// Any id already set on `product` is ignored.
    async fn create(&self, product: Product) -> Result<Product>;

    /// Get a product by id
    async fn get(&self, id: i64) -> Result<Option<Product>>;

    /// List products matching `filter` (all of them for an empty filter)
    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>>;

    /// Replace every non-id field of an existing product
    ///
    /// Returns `None` when no product has this id.
    async fn update(&self, id: i64, product: Product) -> Result<Option<Product>>;

    /// Delete a product; returns whether a row was removed
    async fn delete(&self, id: i64) -> Result<bool>;

    /// Add `delta` to `like_num` in place
    async fn adjust_likes(&self, id: i64, delta: i64) -> Result<Option<Product>>;

    /// Set `is_on_shelf` in place
    async fn set_on_shelf(&self, id: i64, on_shelf: bool) -> Result<Option<Product>>;

    /// Delete every product; returns how many were removed
    async fn delete_all(&self) -> Result<u64>;
}
