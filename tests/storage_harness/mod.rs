//! Shared test harness for storage backend testing
//!
//! Provides product fixtures and the `product_store_tests!` macro, which runs
//! the full `ProductStore` contract against any backend.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//!
//! product_store_tests!(InMemoryProductStore::new());
//! ```

#![allow(dead_code)]

#[macro_use]
mod product_store_tests;

use catalog::core::{Price, Product};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// An unsaved product with default counters
pub fn sample_product(name: &str, description: &str, price: impl Into<Price>) -> Product {
    Product::new(name, description, price)
}

/// A small, varied catalog used by filter tests
///
/// | name  | description          | price |
/// |-------|----------------------|-------|
/// | Hat   | felt hat             | 30    |
/// | Scarf | warm wool scarf      | 20    |
/// | Hat   | straw hat            | 10    |
/// | Socks | Wool socks, 3 pairs  | 12.5  |
/// | Boots | 100% waterproof      | 99.99 |
pub fn sample_catalog() -> Vec<Product> {
    vec![
        sample_product("Hat", "felt hat", 30),
        sample_product("Scarf", "warm wool scarf", 20),
        sample_product("Hat", "straw hat", 10),
        sample_product("Socks", "Wool socks, 3 pairs", 12.5),
        sample_product("Boots", "100% waterproof", 99.99),
    ]
}

/// Names of `products`, in order
pub fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

/// Assert the list has the expected length, with a readable message
pub fn assert_count<T>(list: &[T], expected: usize) {
    assert_eq!(
        list.len(),
        expected,
        "Expected {} items, got {}",
        expected,
        list.len()
    );
}
