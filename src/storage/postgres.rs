//! PostgreSQL storage backend using sqlx.
//!
//! Provides `PostgresProductStore`, backed by a single `products` table via
//! `sqlx::PgPool`. Each operation checks a connection out of the pool for
//! its own duration; updates run inside a transaction that rolls back if it
//! is dropped before commit.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! product-catalog = { version = "0.1", features = ["postgres"] }
//! ```

use crate::core::{Price, Product, ProductFilter, ProductStore, ValidationError};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Postgres, QueryBuilder, Row};

const COLUMNS: &str = "id, name, description, price, like_num, is_on_shelf";

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR NOT NULL,
    description VARCHAR NOT NULL DEFAULT '',
    price DOUBLE PRECISION NOT NULL,
    like_num BIGINT NOT NULL DEFAULT 0,
    is_on_shelf BOOLEAN NOT NULL DEFAULT TRUE
)
"#;

/// Product store backed by PostgreSQL.
///
/// Prices are kept in a `DOUBLE PRECISION` column; integral values read back
/// as [`Price::Int`].
#[derive(Clone, Debug)]
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    /// Create a new `PostgresProductStore` with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `database_url` and make sure the table exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .context("connecting to PostgreSQL")?;

        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    /// Create the `products` table if it is missing.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Initializing database");
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .context("creating products table")?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn product_from_row(row: &PgRow) -> Result<Product> {
    Ok(Product {
        id: Some(row.try_get("id")?),
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        price: Price::from_f64(row.try_get("price")?),
        like_num: row.try_get("like_num")?,
        is_on_shelf: row.try_get("is_on_shelf")?,
    })
}

/// SQLSTATE 22003, raised when `like_num + delta` leaves the BIGINT range
fn is_out_of_range(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == "22003")
}

fn push_filter(query: &mut QueryBuilder<'_, Postgres>, filter: &ProductFilter) {
    query.push(" WHERE TRUE");
    if let Some(id) = filter.id {
        query.push(" AND id = ").push_bind(id);
    }
    if let Some(name) = &filter.name {
        query.push(" AND name = ").push_bind(name.clone());
    }
    if let Some(max_price) = filter.max_price {
        query.push(" AND price <= ").push_bind(max_price);
    }
    if let Some(needle) = &filter.description {
        // literal, case-sensitive substring
        query
            .push(" AND strpos(description, ")
            .push_bind(needle.clone())
            .push(") > 0");
    }
}

#[async_trait]
impl ProductStore for PostgresProductStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn create(&self, product: Product) -> Result<Product> {
        let row = sqlx::query(&format!(
            "INSERT INTO products (name, description, price, like_num, is_on_shelf) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {COLUMNS}"
        ))
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.as_f64())
        .bind(product.like_num)
        .bind(product.is_on_shelf)
        .fetch_one(&self.pool)
        .await
        .context("inserting product")?;

        product_from_row(&row)
    }

    async fn get(&self, id: i64) -> Result<Option<Product>> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM products WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("fetching product")?;

        row.as_ref().map(product_from_row).transpose()
    }

    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        let mut query = QueryBuilder::<Postgres>::new(format!("SELECT {COLUMNS} FROM products"));
        push_filter(&mut query, filter);
        query.push(" ORDER BY id");

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .context("listing products")?;

        rows.iter().map(product_from_row).collect()
    }

    async fn update(&self, id: i64, product: Product) -> Result<Option<Product>> {
        let mut tx = self.pool.begin().await.context("starting transaction")?;

        let row = sqlx::query(&format!(
            "UPDATE products SET name = $2, description = $3, price = $4, \
             like_num = $5, is_on_shelf = $6 WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.as_f64())
        .bind(product.like_num)
        .bind(product.is_on_shelf)
        .fetch_optional(&mut *tx)
        .await
        .context("updating product")?;

        tx.commit().await.context("committing update")?;

        row.as_ref().map(product_from_row).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("deleting product")?;

        Ok(result.rows_affected() > 0)
    }

    async fn adjust_likes(&self, id: i64, delta: i64) -> Result<Option<Product>> {
        let row = sqlx::query(&format!(
            "UPDATE products SET like_num = like_num + $2 WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(delta)
        .fetch_optional(&self.pool)
        .await;

        match row {
            Ok(row) => row.as_ref().map(product_from_row).transpose(),
            Err(e) if is_out_of_range(&e) => match self.get(id).await? {
                Some(current) => Err(ValidationError::LikeCountOutOfRange {
                    like_num: current.like_num,
                    delta,
                }
                .into()),
                None => Ok(None),
            },
            Err(e) => Err(anyhow::Error::new(e).context("adjusting likes")),
        }
    }

    async fn set_on_shelf(&self, id: i64, on_shelf: bool) -> Result<Option<Product>> {
        let row = sqlx::query(&format!(
            "UPDATE products SET is_on_shelf = $2 WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(on_shelf)
        .fetch_optional(&self.pool)
        .await
        .context("updating shelf state")?;

        row.as_ref().map(product_from_row).transpose()
    }

    async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await
            .context("deleting all products")?;

        Ok(result.rows_affected())
    }
}
