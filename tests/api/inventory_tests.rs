//! Inventory API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_inventory_lifecycle() {
    let app = TestApp::new();
    let id = app
        .create(
            "/api/v1/inventories",
            json!({
                "store_id": "store-1",
                "product_id": "product-1",
                "quantity": 12,
                "price": "450.00"
            }),
        )
        .await;
    let uri = format!("/api/v1/inventories/{}", id);

    let (status, _) = app
        .put_json(&uri, json!({"price_special": "399.90", "quantity": 10}))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.get(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quantity"], 10);
    assert_eq!(body["price"], "450.00");
    assert_eq!(body["price_special"], "399.90");
    assert_eq!(body["store_id"], "store-1");

    let (status, _) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = app.get(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_requires_quantity() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/v1/inventories",
            json!({"store_id": "s", "product_id": "p", "price": "1.00"}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "quantity: cannot be blank");
}
