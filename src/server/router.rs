//! Router assembly for the product routes

use super::handlers::{
    AppState, create_product, delete_product, get_product, healthcheck, index, like_product,
    list_products, method_not_allowed, put_on_shelf, route_not_found, take_off_shelf,
    unlike_product, update_product,
};
use axum::{
    Router,
    routing::{get, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build product routes
///
/// - GET    /products                 - List products (filters: name, price, description)
/// - POST   /products                 - Create a product
/// - GET    /products/{id}            - Get a product
/// - PUT    /products/{id}            - Replace a product
/// - DELETE /products/{id}            - Delete a product
/// - PUT    /products/{id}/like       - Increment like_num
/// - PUT    /products/{id}/unlike     - Decrement like_num
/// - PUT    /products/{id}/on-shelf   - Set is_on_shelf
/// - PUT    /products/{id}/off-shelf  - Clear is_on_shelf
pub fn build_product_routes(state: AppState) -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/products/{id}/like", put(like_product))
        .route("/products/{id}/unlike", put(unlike_product))
        .route("/products/{id}/on-shelf", put(put_on_shelf))
        .route("/products/{id}/off-shelf", put(take_off_shelf))
        .with_state(state)
}

/// Build service metadata routes (`/` and `/healthcheck`)
pub fn build_service_routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthcheck", get(healthcheck))
}

/// Build the complete application router
///
/// Merges metadata, product and custom routes, installs JSON fallbacks for
/// unknown paths and methods, and wraps everything in request tracing and
/// a permissive CORS policy.
pub fn build_router(state: AppState, custom_routes: Vec<Router>) -> Router {
    let mut app = build_service_routes().merge(build_product_routes(state));

    for custom_router in custom_routes {
        app = app.merge(custom_router);
    }

    app.fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
