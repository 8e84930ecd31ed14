//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{http::header, response::IntoResponse, routing::get, Router};

use super::handlers;
use crate::infrastructure::metrics;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        metrics::gather_metrics(),
    )
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(catalogue_routes())
        .merge(warehouse_routes())
        .merge(locality_routes())
}

/// Categories and products
fn catalogue_routes() -> Router<AppState> {
    use handlers::{category, product};

    Router::new()
        .route(
            "/categories",
            get(category::list_categories).post(category::add_category),
        )
        .route(
            "/categories/{id}",
            get(category::get_category)
                .put(category::update_category)
                .delete(category::delete_category),
        )
        .route(
            "/products",
            get(product::list_products).post(product::add_product),
        )
        .route(
            "/products/{id}",
            get(product::get_product)
                .put(product::update_product)
                .delete(product::delete_product),
        )
}

/// Stores and inventory
fn warehouse_routes() -> Router<AppState> {
    use handlers::{inventory, store};

    Router::new()
        .route("/stores", get(store::list_stores).post(store::add_store))
        .route(
            "/stores/{id}",
            get(store::get_store)
                .put(store::update_store)
                .delete(store::delete_store),
        )
        .route(
            "/inventories",
            get(inventory::list_inventories).post(inventory::add_inventory),
        )
        .route(
            "/inventories/{id}",
            get(inventory::get_inventory)
                .put(inventory::update_inventory)
                .delete(inventory::delete_inventory),
        )
}

/// Countries, cities and currencies
fn locality_routes() -> Router<AppState> {
    use handlers::locality;

    Router::new()
        .route(
            "/countries",
            get(locality::list_countries).post(locality::add_country),
        )
        .route(
            "/countries/{id}",
            get(locality::get_country)
                .put(locality::update_country)
                .delete(locality::delete_country),
        )
        .route(
            "/cities",
            get(locality::list_cities).post(locality::add_city),
        )
        .route(
            "/cities/{id}",
            get(locality::get_city)
                .put(locality::update_city)
                .delete(locality::delete_city),
        )
        .route(
            "/currencies",
            get(locality::list_currencies).post(locality::add_currency),
        )
        // GET and PUT take the country id, DELETE the currency's own id.
        .route(
            "/currencies/{key}",
            get(locality::get_currency)
                .put(locality::update_currency)
                .delete(locality::delete_currency),
        )
}
