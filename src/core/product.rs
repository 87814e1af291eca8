//! The product entity
//!
//! A [`Product`] is one row of the catalog. It owns the typed parse from an
//! untyped JSON mapping ([`Product::from_json`]) and the flat six-field
//! serialization ([`Product::to_json`]).

use crate::core::error::ValidationError;
use crate::core::validation::{FieldLimits, validators};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// Numeric price, kept as an integer when it was given as one
///
/// Serialized untagged, so `42` round-trips as `42` and `42.5` as `42.5`.
/// Comparison is by numeric value: `Price::Int(42) == Price::Float(42.0)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Int(i64),
    Float(f64),
}

impl Price {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Price::Int(v) => v as f64,
            Price::Float(v) => v,
        }
    }

    /// Rebuild a price read back from a floating-point column
    ///
    /// `i64::MAX as f64` is 2^63, one past the largest `i64`, so the upper
    /// bound is exclusive.
    pub fn from_f64(value: f64) -> Self {
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            Price::Int(value as i64)
        } else {
            Price::Float(value)
        }
    }

    /// Read a price out of a JSON number; anything else is rejected
    pub fn from_json(value: &Value) -> Option<Self> {
        let Value::Number(number) = value else {
            return None;
        };
        if let Some(v) = number.as_i64() {
            Some(Price::Int(v))
        } else {
            number.as_f64().map(Price::Float)
        }
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Price::Int(a), Price::Int(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Price::Int(a), Price::Int(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Price::Int(value)
    }
}

impl From<i32> for Price {
    fn from(value: i32) -> Self {
        Price::Int(i64::from(value))
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Price::Float(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Int(v) => write!(f, "{}", v),
            Price::Float(v) => write!(f, "{}", v),
        }
    }
}

/// A catalog record
///
/// `id` is `None` until the store assigns one on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub like_num: i64,
    pub is_on_shelf: bool,
}

impl Product {
    /// Create an unsaved product with default counters (no likes, on shelf)
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<Price>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            price: price.into(),
            like_num: 0,
            is_on_shelf: true,
        }
    }

    /// Parse and validate an untyped JSON mapping
    ///
    /// Any `id` present in the input is ignored; the result always has
    /// `id == None` and the caller decides which id it belongs to.
    pub fn from_json(data: &Value, limits: &FieldLimits) -> Result<Self, ValidationError> {
        let fields = validators::require_object(data)?;

        let name = validators::required_string(fields, "name")?;
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        validators::max_chars(name, limits.name_max_len)
            .map_err(|(max, actual)| ValidationError::NameTooLong { max, actual })?;

        let description = validators::optional_string(fields, "description")?.unwrap_or_default();
        validators::max_chars(description, limits.description_max_len)
            .map_err(|(max, actual)| ValidationError::DescriptionTooLong { max, actual })?;

        let price = match fields.get("price") {
            None => return Err(ValidationError::MissingField { field: "price" }),
            Some(value) => Price::from_json(value).ok_or(ValidationError::InvalidPriceType)?,
        };

        let like_num = validators::optional_integer(fields, "like_num")?.unwrap_or(0);
        let is_on_shelf = validators::optional_bool(fields, "is_on_shelf")?.unwrap_or(true);

        Ok(Self {
            id: None,
            name: name.to_string(),
            description: description.to_string(),
            price,
            like_num,
            is_on_shelf,
        })
    }

    /// Flat JSON mapping with exactly the six product fields
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "price": self.price,
            "like_num": self.like_num,
            "is_on_shelf": self.is_on_shelf,
        })
    }

    /// Same product bound to another id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Product {} id=[{}]>", self.name, id),
            None => write!(f, "<Product {} id=[None]>", self.name),
        }
    }
}
