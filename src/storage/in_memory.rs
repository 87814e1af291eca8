//! In-memory implementation of ProductStore for testing and development

use crate::core::{Product, ProductFilter, ProductStore, ValidationError};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

#[derive(Debug)]
struct Table {
    rows: IndexMap<i64, Product>,
    next_id: i64,
}

/// In-memory product store
///
/// Rows are kept in insertion order, which is also id order since ids are
/// handed out from a monotonically increasing counter and never reused.
/// Every mutation runs under a single write-lock acquisition.
#[derive(Clone)]
pub struct InMemoryProductStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryProductStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                rows: IndexMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Apply `f` to one row under the write lock
    ///
    /// `f` must not panic; a rejected change leaves the row untouched.
    fn modify(
        &self,
        id: i64,
        f: impl FnOnce(&mut Product) -> Result<()>,
    ) -> Result<Option<Product>> {
        let mut table = self
            .table
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let Some(product) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        f(product)?;
        Ok(Some(product.clone()))
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    fn backend_name(&self) -> &'static str {
        "in_memory"
    }

    async fn create(&self, product: Product) -> Result<Product> {
        let mut table = self
            .table
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let id = table.next_id;
        table.next_id += 1;

        let product = product.with_id(id);
        table.rows.insert(id, product.clone());

        Ok(product)
    }

    async fn get(&self, id: i64) -> Result<Option<Product>> {
        let table = self
            .table
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(table.rows.get(&id).cloned())
    }

    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        let table = self
            .table
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(table
            .rows
            .values()
            .filter(|product| filter.matches(product))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, product: Product) -> Result<Option<Product>> {
        self.modify(id, |row| {
            *row = product.with_id(id);
            Ok(())
        })
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut table = self
            .table
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        Ok(table.rows.shift_remove(&id).is_some())
    }

    async fn adjust_likes(&self, id: i64, delta: i64) -> Result<Option<Product>> {
        self.modify(id, |row| {
            row.like_num = row.like_num.checked_add(delta).ok_or(
                ValidationError::LikeCountOutOfRange {
                    like_num: row.like_num,
                    delta,
                },
            )?;
            Ok(())
        })
    }

    async fn set_on_shelf(&self, id: i64, on_shelf: bool) -> Result<Option<Product>> {
        self.modify(id, |row| {
            row.is_on_shelf = on_shelf;
            Ok(())
        })
    }

    async fn delete_all(&self) -> Result<u64> {
        let mut table = self
            .table
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let removed = table.rows.len() as u64;
        table.rows.clear();

        Ok(removed)
    }
}
