//! Axum extractors for validated product input
//!
//! [`ValidatedProduct`] enforces the JSON content type, decodes the body and
//! runs the product parse before a handler is entered. [`ProductId`] reads
//! the `{id}` path segment, treating a non-integer segment as an unknown
//! resource rather than a bad request.

use super::FieldLimits;
use crate::core::error::{CatalogError, RequestError, ValidationError};
use crate::core::product::Product;
use axum::{
    body::Bytes,
    extract::{FromRef, FromRequest, FromRequestParts, Path, Request},
    http::{header::CONTENT_TYPE, request::Parts},
};
use serde_json::Value;

/// Axum extractor yielding a product parsed from a JSON request body
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_product(
///     State(state): State<AppState>,
///     ValidatedProduct(product): ValidatedProduct,
/// ) -> Result<impl IntoResponse, CatalogError> {
///     // product already passed the validation contract
/// }
/// ```
#[derive(Debug)]
pub struct ValidatedProduct(pub Product);

impl ValidatedProduct {
    pub fn into_inner(self) -> Product {
        self.0
    }
}

/// Whether a `Content-Type` header value declares a JSON body
pub fn is_json_content_type(value: &str) -> bool {
    value
        .split(';')
        .next()
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

impl<S> FromRequest<S> for ValidatedProduct
where
    S: Send + Sync,
    FieldLimits: FromRef<S>,
{
    type Rejection = CatalogError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        if !content_type.as_deref().is_some_and(is_json_content_type) {
            return Err(CatalogError::UnsupportedMediaType {
                content_type: content_type.unwrap_or_else(|| "none".to_string()),
            });
        }

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ValidationError::InvalidJson {
                message: e.body_text(),
            })?;

        let payload: Value =
            serde_json::from_slice(&body).map_err(|e| ValidationError::InvalidJson {
                message: e.to_string(),
            })?;

        let limits = FieldLimits::from_ref(state);
        Ok(Self(Product::from_json(&payload, &limits)?))
    }
}

/// Product id taken from the `{id}` path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i64);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = CatalogError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path().to_string();
        let not_found = || CatalogError::from(RequestError::RouteNotFound { path: path.clone() });

        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found())?;

        raw.parse::<i64>().map(ProductId).map_err(|_| not_found())
    }
}
