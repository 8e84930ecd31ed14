//! Product API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::TestApp;

fn milk(category_id: &str) -> Value {
    json!({
        "category_id": category_id,
        "name": "Milk 3.2%",
        "measure": "l",
        "barcode": "4870001234567",
        "brand": "Lactel"
    })
}

#[tokio::test]
async fn test_create_returns_created_product() {
    let app = TestApp::new();

    let (status, body) = app.post_json("/api/v1/products", milk("cat-1")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["name"], "Milk 3.2%");
    assert_eq!(body["description"], "");
}

#[tokio::test]
async fn test_get_returns_input_values() {
    let app = TestApp::new();
    let id = app.create("/api/v1/products", milk("cat-1")).await;

    let (status, body) = app.get(&format!("/api/v1/products/{}", id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category_id"], "cat-1");
    assert_eq!(body["measure"], "l");
    assert_eq!(body["barcode"], "4870001234567");
    assert_eq!(body["brand"], "Lactel");
}

#[tokio::test]
async fn test_create_requires_barcode() {
    let app = TestApp::new();
    let mut body = milk("cat-1");
    body["barcode"] = json!("");

    let (status, body) = app.post_json("/api/v1/products", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "barcode: cannot be blank");
}

#[tokio::test]
async fn test_update_patches_only_supplied_fields() {
    let app = TestApp::new();
    let id = app.create("/api/v1/products", milk("cat-1")).await;
    let uri = format!("/api/v1/products/{}", id);

    let (status, _) = app.put_json(&uri, json!({"brand": "Food Master"})).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app.get(&uri).await;
    assert_eq!(body["brand"], "Food Master");
    assert_eq!(body["name"], "Milk 3.2%");
    assert_eq!(body["barcode"], "4870001234567");
}

#[tokio::test]
async fn test_empty_update_succeeds() {
    let app = TestApp::new();
    let id = app.create("/api/v1/products", milk("cat-1")).await;

    let (status, _) = app
        .put_json(&format!("/api/v1/products/{}", id), json!({}))
        .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
}
