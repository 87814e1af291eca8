//! Product filters and list query parameters

use crate::core::error::ValidationError;
use crate::core::product::Product;
use serde::Deserialize;

/// Conjunctive product filter
///
/// Every supplied predicate must hold for a product to match; an empty
/// filter matches everything.
///
/// - `id`: exact id
/// - `name`: exact, case-sensitive name
/// - `max_price`: `price <= max_price`
/// - `description`: case-sensitive substring of the description
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub max_price: Option<f64>,
    pub description: Option<String>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.name.is_none()
            && self.max_price.is_none()
            && self.description.is_none()
    }

    /// Evaluate the filter against one product
    pub fn matches(&self, product: &Product) -> bool {
        self.id.is_none_or(|id| product.id == Some(id))
            && self.name.as_deref().is_none_or(|name| product.name == name)
            && self
                .max_price
                .is_none_or(|max| product.price.as_f64() <= max)
            && self
                .description
                .as_deref()
                .is_none_or(|needle| product.description.contains(needle))
    }
}

/// Raw query string of `GET /products`
///
/// # Example
/// ```text
/// GET /products?name=Hat
/// GET /products?price=20&description=wool
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub name: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
}

impl ListParams {
    /// Build the conjunctive filter; empty values count as absent
    pub fn into_filter(self) -> Result<ProductFilter, ValidationError> {
        let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());

        let max_price = match non_empty(self.price) {
            None => None,
            Some(raw) => Some(
                raw.trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|p| p.is_finite())
                    .ok_or(ValidationError::InvalidPriceFilter { value: raw })?,
            ),
        };

        Ok(ProductFilter {
            id: None,
            name: non_empty(self.name),
            max_price,
            description: non_empty(self.description),
        })
    }
}
