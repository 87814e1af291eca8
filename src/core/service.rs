//! Product operations over an injected store
//!
//! [`ProductService`] is the query/filter evaluator and the home of the
//! mutation operations. It holds no state of its own beyond the store
//! handle, so it is cheap to clone into every request.

use crate::core::error::{CatalogError, CatalogResult, ValidationError};
use crate::core::product::Product;
use crate::core::query::ProductFilter;
use crate::core::store::ProductStore;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Every product, in id order
    pub async fn all(&self) -> CatalogResult<Vec<Product>> {
        info!("Processing all products");
        self.filter(&ProductFilter::new()).await
    }

    pub async fn find(&self, id: i64) -> CatalogResult<Option<Product>> {
        info!(id, "Processing lookup");
        self.store.get(id).await.map_err(CatalogError::storage)
    }

    pub async fn find_or_not_found(&self, id: i64) -> CatalogResult<Product> {
        self.find(id).await?.ok_or(CatalogError::NotFound { id })
    }

    pub async fn find_by_name(&self, name: &str) -> CatalogResult<Vec<Product>> {
        info!(name, "Processing name query");
        self.filter(&ProductFilter::new().with_name(name)).await
    }

    /// Products whose price is lower than or equal to `max_price`
    pub async fn find_by_price(&self, max_price: f64) -> CatalogResult<Vec<Product>> {
        info!(max_price, "Processing price query");
        self.filter(&ProductFilter::new().with_max_price(max_price)).await
    }

    /// Products whose description contains `needle`
    pub async fn find_by_description(&self, needle: &str) -> CatalogResult<Vec<Product>> {
        info!(description = needle, "Processing description query");
        self.filter(&ProductFilter::new().with_description(needle)).await
    }

    /// Products matching every supplied predicate of `filter`
    pub async fn filter(&self, filter: &ProductFilter) -> CatalogResult<Vec<Product>> {
        self.store.list(filter).await.map_err(CatalogError::storage)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Insert a product; the store assigns its id
    pub async fn create(&self, mut product: Product) -> CatalogResult<Product> {
        info!(name = %product.name, "Creating product");
        product.id = None;
        self.store
            .create(product)
            .await
            .map_err(CatalogError::storage)
    }

    /// Full replace of an existing product, keyed by `product.id`
    pub async fn update(&self, product: Product) -> CatalogResult<Product> {
        info!(name = %product.name, "Saving product");
        let id = product.id.ok_or(ValidationError::EmptyId)?;
        self.store
            .update(id, product)
            .await
            .map_err(CatalogError::storage)?
            .ok_or(CatalogError::NotFound { id })
    }

    /// Remove a product; removing an unknown id is a no-op
    pub async fn delete(&self, id: i64) -> CatalogResult<()> {
        let removed = self.store.delete(id).await.map_err(CatalogError::storage)?;
        info!(id, removed, "Deleting product");
        Ok(())
    }

    /// Remove every product
    pub async fn delete_all(&self) -> CatalogResult<u64> {
        let removed = self.store.delete_all().await.map_err(CatalogError::storage)?;
        info!(removed, "Deleted all products");
        Ok(removed)
    }

    pub async fn like(&self, id: i64) -> CatalogResult<Product> {
        info!(id, "Liking product");
        self.adjust_likes(id, 1).await
    }

    /// Decrement the like counter; it has no floor and may go negative
    pub async fn unlike(&self, id: i64) -> CatalogResult<Product> {
        info!(id, "Unliking product");
        self.adjust_likes(id, -1).await
    }

    pub async fn put_on_shelf(&self, id: i64) -> CatalogResult<Product> {
        info!(id, "Putting product on shelf");
        self.set_on_shelf(id, true).await
    }

    pub async fn take_off_shelf(&self, id: i64) -> CatalogResult<Product> {
        info!(id, "Taking product off shelf");
        self.set_on_shelf(id, false).await
    }

    async fn adjust_likes(&self, id: i64, delta: i64) -> CatalogResult<Product> {
        self.store
            .adjust_likes(id, delta)
            .await
            .map_err(CatalogError::storage)?
            .ok_or(CatalogError::NotFound { id })
    }

    async fn set_on_shelf(&self, id: i64, on_shelf: bool) -> CatalogResult<Product> {
        self.store
            .set_on_shelf(id, on_shelf)
            .await
            .map_err(CatalogError::storage)?
            .ok_or(CatalogError::NotFound { id })
    }
}
