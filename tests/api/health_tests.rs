//! Health Check API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let (status, body) = app.get("/health/live").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_readiness_without_database_is_healthy() {
    let app = TestApp::new();

    let (status, body) = app.get("/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["storage"], "memory");
    assert_eq!(body["checks"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_metrics_count_requests_by_route() {
    let app = TestApp::new();
    app.get("/api/v1/categories").await;

    let (status, text) = app.get_text("/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("warehouse_service_http_requests_total"));
    assert!(text.contains("/api/v1/categories"));
}
