//! CORS

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::CorsSettings;

/// Methods the REST API answers to.
const METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// Build the CORS layer. `*` (or nothing parseable) opens the API to any origin.
pub fn create_cors_layer(settings: &CorsSettings) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(METHODS.to_vec())
        .allow_headers(Any);

    match allowed_origins(&settings.allowed_origins) {
        Some(origins) => layer
            .allow_origin(AllowOrigin::list(origins))
            .max_age(std::time::Duration::from_secs(3600)),
        None => layer.allow_origin(Any),
    }
}

/// Explicit origins, or `None` when any origin is allowed.
fn allowed_origins(configured: &[String]) -> Option<Vec<HeaderValue>> {
    if configured.iter().any(|o| o.trim() == "*") {
        return None;
    }

    let origins: Vec<HeaderValue> = configured
        .iter()
        .filter_map(|o| match o.trim().parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    (!origins.is_empty()).then_some(origins)
}
