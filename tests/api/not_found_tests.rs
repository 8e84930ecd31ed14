//! Missing identifiers answer 404 on every resource.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use crate::common::TestApp;

#[test_case("categories", json!({"name": "Dairy"}) ; "category")]
#[test_case("products", json!({"name": "Milk"}) ; "product")]
#[test_case("stores", json!({"name": "Corner"}) ; "store")]
#[test_case("inventories", json!({"quantity": 1}) ; "inventory")]
#[test_case("countries", json!({"name": "Kazakhstan"}) ; "country")]
#[test_case("cities", json!({"name": "Almaty"}) ; "city")]
#[test_case("currencies", json!({"sign": "$"}) ; "currency")]
#[tokio::test]
async fn test_missing_id_is_not_found(resource: &str, patch: serde_json::Value) {
    let app = TestApp::new();
    let uri = format!("/api/v1/{}/does-not-exist", resource);

    let (status, body) = app.get(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 10001);

    let (status, _) = app.put_json(&uri, patch).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test_case("products" ; "product")]
#[test_case("inventories" ; "inventory")]
#[test_case("stores" ; "store")]
#[tokio::test]
async fn test_empty_update_of_missing_id_is_not_found(resource: &str) {
    let app = TestApp::new();

    let (status, _) = app
        .put_json(&format!("/api/v1/{}/does-not-exist", resource), json!({}))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
