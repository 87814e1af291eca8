//! HTTP handlers for product operations
//!
//! Each handler decodes its parameters, calls one [`ProductService`]
//! operation and encodes the result. All failures surface as
//! [`CatalogError`], which renders itself as a JSON error body.

use axum::{
    Json,
    extract::{OriginalUri, Query, State, rejection::QueryRejection},
    http::{HeaderMap, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::core::error::{CatalogError, RequestError, ValidationError};
use crate::core::validation::{FieldLimits, ProductId, ValidatedProduct};
use crate::core::{ListParams, Product, ProductService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: ProductService,
    pub limits: FieldLimits,
}

impl AppState {
    pub fn new(service: ProductService, limits: FieldLimits) -> Self {
        Self { service, limits }
    }
}

impl axum::extract::FromRef<AppState> for FieldLimits {
    fn from_ref(state: &AppState) -> Self {
        state.limits
    }
}

/// Absolute URL for `path` on the host the client addressed
///
/// Falls back to the bare path when the request carries no `Host` header.
fn external_url(headers: &HeaderMap, path: &str) -> String {
    match headers.get(header::HOST).and_then(|h| h.to_str().ok()) {
        Some(host) => format!("http://{}{}", host, path),
        None => path.to_string(),
    }
}

// =============================================================================
// Service metadata
// =============================================================================

/// GET /
pub async fn index(headers: HeaderMap) -> Json<Value> {
    tracing::info!("Request for Root URL");
    Json(json!({
        "name": "Product REST API Service",
        "version": "1.0",
        "paths": external_url(&headers, "/products"),
    }))
}

/// GET /healthcheck
pub async fn healthcheck() -> Json<Value> {
    Json(json!({
        "status": 200,
        "message": "Healthy",
    }))
}

// =============================================================================
// Products
// =============================================================================

/// GET /products
///
/// Query parameters `name`, `price` and `description` are combined with AND.
pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Product>>, CatalogError> {
    tracing::info!("Request for product list");
    let Query(params) = query.map_err(|e| ValidationError::InvalidQuery {
        message: e.body_text(),
    })?;
    let filter = params.into_filter()?;
    let products = state.service.filter(&filter).await?;
    tracing::info!(count = products.len(), "Returning products");
    Ok(Json(products))
}

/// GET /products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Json<Product>, CatalogError> {
    tracing::info!(id, "Request for product");
    Ok(Json(state.service.find_or_not_found(id).await?))
}

/// POST /products
///
/// Responds 201 with the stored product and a `Location` header.
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedProduct(product): ValidatedProduct,
) -> Result<Response, CatalogError> {
    tracing::info!("Request to create a product");
    let created = state.service.create(product).await?;

    let location = created
        .id
        .map(|id| external_url(&headers, &format!("/products/{}", id)))
        .unwrap_or_default();
    tracing::info!(id = ?created.id, "Product created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    )
        .into_response())
}

/// PUT /products/{id}
///
/// The path id wins over any id in the body.
pub async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    ValidatedProduct(product): ValidatedProduct,
) -> Result<Json<Product>, CatalogError> {
    tracing::info!(id, "Request to update product");
    Ok(Json(state.service.update(product.with_id(id)).await?))
}

/// DELETE /products/{id}
///
/// Always 204, whether or not the product existed.
pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<StatusCode, CatalogError> {
    tracing::info!(id, "Request to delete product");
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /products/{id}/like
pub async fn like_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Json<Product>, CatalogError> {
    Ok(Json(state.service.like(id).await?))
}

/// PUT /products/{id}/unlike
pub async fn unlike_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Json<Product>, CatalogError> {
    Ok(Json(state.service.unlike(id).await?))
}

/// PUT /products/{id}/on-shelf
pub async fn put_on_shelf(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Json<Product>, CatalogError> {
    Ok(Json(state.service.put_on_shelf(id).await?))
}

/// PUT /products/{id}/off-shelf
pub async fn take_off_shelf(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Json<Product>, CatalogError> {
    Ok(Json(state.service.take_off_shelf(id).await?))
}

// =============================================================================
// Fallbacks
// =============================================================================

/// Any path without a route
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> CatalogError {
    RequestError::RouteNotFound {
        path: uri.path().to_string(),
    }
    .into()
}

/// Known path, unsupported method
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> CatalogError {
    RequestError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
    .into()
}
