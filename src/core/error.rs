//! Typed error handling for the catalog service
//!
//! Every failure a request can hit is one variant of [`CatalogError`]. Each
//! variant knows its HTTP status code and a stable machine-readable code, and
//! the whole enum converts into a JSON response through [`IntoResponse`].
//!
//! # Error Categories
//!
//! - [`ValidationError`]: malformed, missing, oversized or mistyped fields (400)
//! - `NotFound`: unknown product id (404)
//! - `UnsupportedMediaType`: write request without a JSON body (415)
//! - [`RequestError`]: unknown route or method (404 / 405)
//! - [`StorageError`]: backend failures (500)
//! - [`ConfigError`]: configuration loading failures (500)
//!
//! # Example
//!
//! ```rust,ignore
//! match service.find_or_not_found(42).await {
//!     Ok(product) => println!("Found: {:?}", product),
//!     Err(CatalogError::NotFound { id }) => println!("Product {} not found", id),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type for the catalog service
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Input failed the product validation contract
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No product with this id exists
    #[error("Product with id '{id}' was not found")]
    NotFound { id: i64 },

    /// Write request whose body is not declared as JSON
    #[error("Content-Type must be application/json (got '{content_type}')")]
    UnsupportedMediaType { content_type: String },

    /// Routing-level failures
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Storage backend errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body
    pub status: u16,
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl CatalogError {
    /// Wrap a failure reported by a store through `anyhow`
    ///
    /// A [`ValidationError`] raised by the store keeps its type; anything
    /// else is a backend failure.
    pub fn storage(err: anyhow::Error) -> Self {
        match err.downcast::<ValidationError>() {
            Ok(validation) => CatalogError::Validation(validation),
            Err(err) => CatalogError::Storage(StorageError::Backend {
                message: format!("{:#}", err),
            }),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
            CatalogError::NotFound { .. } => StatusCode::NOT_FOUND,
            CatalogError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            CatalogError::Request(e) => e.status_code(),
            CatalogError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::Validation(_) => "VALIDATION_ERROR",
            CatalogError::NotFound { .. } => "PRODUCT_NOT_FOUND",
            CatalogError::UnsupportedMediaType { .. } => "UNSUPPORTED_MEDIA_TYPE",
            CatalogError::Request(e) => e.error_code(),
            CatalogError::Storage(_) => "STORAGE_ERROR",
            CatalogError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            status: self.status_code().as_u16(),
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            CatalogError::NotFound { id } => Some(serde_json::json!({ "id": id })),
            CatalogError::Validation(e) => e.details(),
            _ => None,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, code = self.error_code(), "request rejected");
        }
        (status, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors produced while turning untyped input into a product
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The body is not a JSON object
    #[error("malformed body")]
    MalformedBody,

    /// The body is not valid JSON at all
    #[error("malformed body: {message}")]
    InvalidJson { message: String },

    /// A required key is absent
    #[error("missing {field}")]
    MissingField { field: &'static str },

    /// A key holds a value of the wrong JSON type
    #[error("invalid {field} type: expected {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("name must not be empty")]
    EmptyName,

    #[error("name too long")]
    NameTooLong { max: usize, actual: usize },

    #[error("description too long")]
    DescriptionTooLong { max: usize, actual: usize },

    /// Price is present but not an integer or float
    #[error("invalid price type")]
    InvalidPriceType,

    /// The `price` query parameter could not be read as a number
    #[error("invalid price filter: '{value}'")]
    InvalidPriceFilter { value: String },

    /// The list query string could not be decoded
    #[error("invalid query string: {message}")]
    InvalidQuery { message: String },

    /// A like/unlike would move `like_num` outside the `i64` range
    #[error("like_num out of range")]
    LikeCountOutOfRange { like_num: i64, delta: i64 },

    /// Update requested on a product that carries no id
    #[error("empty id")]
    EmptyId,
}

impl ValidationError {
    /// Extra context attached to the JSON error body
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            ValidationError::MissingField { field } => Some(serde_json::json!({ "field": field })),
            ValidationError::InvalidType { field, expected } => Some(serde_json::json!({
                "field": field,
                "expected": expected,
            })),
            ValidationError::NameTooLong { max, actual } => Some(serde_json::json!({
                "field": "name",
                "max": max,
                "actual": actual,
            })),
            ValidationError::DescriptionTooLong { max, actual } => Some(serde_json::json!({
                "field": "description",
                "max": max,
                "actual": actual,
            })),
            ValidationError::InvalidPriceType => Some(serde_json::json!({
                "field": "price",
                "expected": "integer or float",
            })),
            ValidationError::LikeCountOutOfRange { like_num, delta } => Some(serde_json::json!({
                "field": "like_num",
                "like_num": like_num,
                "delta": delta,
            })),
            _ => None,
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to HTTP routing
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("No route for '{path}'")]
    RouteNotFound { path: String },

    #[error("Method {method} not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            RequestError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::RouteNotFound { .. } => "ROUTE_NOT_FOUND",
            RequestError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failure reported by the backend while running an operation
    #[error("Storage error: {message}")]
    Backend { message: String },

    /// The backend could not be reached or opened
    #[error("Failed to connect to {backend}: {message}")]
    Connection { backend: String, message: String },

    /// The backend named in the configuration is not compiled in
    #[error("Storage backend '{backend}' is unavailable in this build")]
    Unavailable { backend: String },
}

// =============================================================================
// Config Errors
// =============================================================================

fn in_file(file: &Option<String>) -> String {
    file.as_ref()
        .map(|f| format!(" '{}'", f))
        .unwrap_or_default()
}

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse configuration{}: {message}", in_file(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

impl From<serde_yaml::Error> for CatalogError {
    fn from(err: serde_yaml::Error) -> Self {
        CatalogError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
