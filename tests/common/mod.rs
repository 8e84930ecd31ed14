//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use warehouse_service::application::services::{CatalogueService, WarehouseService};
use warehouse_service::config::Settings;
use warehouse_service::infrastructure::Repositories;
use warehouse_service::startup::{build_router, AppState};

/// Test application over fresh in-memory repositories
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let state = AppState::new(&Repositories::memory(), None, Settings::in_memory());
        Self {
            router: build_router(state),
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("POST", uri, Some(body.to_string())).await
    }

    pub async fn put_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("PUT", uri, Some(body.to_string())).await
    }

    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        self.send("POST", uri, Some(body.to_string())).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send("DELETE", uri, None).await
    }

    /// GET a non-JSON endpoint.
    pub async fn get_text(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Create a resource and return its id; panics unless the API answers 201.
    pub async fn create(&self, uri: &str, body: Value) -> String {
        let (status, body) = self.post_json(uri, body).await;
        assert_eq!(status, StatusCode::CREATED, "create {} failed: {}", uri, body);
        body["id"]
            .as_str()
            .map(str::to_string)
            .expect("created resource has an id")
    }

    async fn send(&self, method: &str, uri: &str, body: Option<String>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body)),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        read(response).await
    }
}

/// Status and JSON body (or `Null` for an empty / non-JSON body).
pub async fn read(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Both services over one shared set of in-memory repositories
pub fn services() -> (CatalogueService, WarehouseService) {
    let repositories = Repositories::memory();
    (
        CatalogueService::new(&repositories),
        WarehouseService::new(&repositories),
    )
}
