//! Validation of incoming product data
//!
//! [`validators`] holds the field-level checks used by
//! [`Product::from_json`](crate::core::product::Product::from_json), and
//! [`extractor`] plugs that parse into axum so handlers only ever see
//! validated products.

pub mod extractor;
pub mod validators;

pub use extractor::{ProductId, ValidatedProduct};

use serde::{Deserialize, Serialize};

/// Configured length bounds for product text fields
///
/// Lengths are counted in characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldLimits {
    pub name_max_len: usize,
    pub description_max_len: usize,
}

impl FieldLimits {
    pub const DEFAULT_NAME_MAX_LEN: usize = 63;
    pub const DEFAULT_DESCRIPTION_MAX_LEN: usize = 256;
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            name_max_len: Self::DEFAULT_NAME_MAX_LEN,
            description_max_len: Self::DEFAULT_DESCRIPTION_MAX_LEN,
        }
    }
}
