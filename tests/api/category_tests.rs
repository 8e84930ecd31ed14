//! Category API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_parent_lists_its_child() {
    let app = TestApp::new();
    let dairy = app
        .create("/api/v1/categories", json!({"name": "Dairy"}))
        .await;
    app.create(
        "/api/v1/categories",
        json!({"parentID": dairy, "name": "Milk"}),
    )
    .await;

    let (status, body) = app.get(&format!("/api/v1/categories/{}", dairy)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Dairy");
    let children = body["children"].as_array().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["name"], "Milk");
}

#[tokio::test]
async fn test_children_are_one_level_deep() {
    let app = TestApp::new();
    let dairy = app
        .create("/api/v1/categories", json!({"name": "Dairy"}))
        .await;
    let milk = app
        .create(
            "/api/v1/categories",
            json!({"parentID": dairy, "name": "Milk"}),
        )
        .await;
    app.create(
        "/api/v1/categories",
        json!({"parentID": milk, "name": "Skimmed"}),
    )
    .await;

    let (_, body) = app.get(&format!("/api/v1/categories/{}", dairy)).await;

    let children = body["children"].as_array().unwrap();
    assert_eq!(children.len(), 1);
    assert!(children[0].get("children").is_none());
}

#[tokio::test]
async fn test_list_is_flat() {
    let app = TestApp::new();
    let dairy = app
        .create("/api/v1/categories", json!({"name": "Dairy"}))
        .await;
    app.create(
        "/api/v1/categories",
        json!({"parentID": dairy, "name": "Milk"}),
    )
    .await;

    let (status, body) = app.get("/api/v1/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_requires_name() {
    let app = TestApp::new();

    let (status, body) = app.post_json("/api/v1/categories", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "name: cannot be blank");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new();

    let (status, _) = app.post_raw("/api/v1/categories", "{\"name\":").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rename_then_delete() {
    let app = TestApp::new();
    let id = app
        .create("/api/v1/categories", json!({"name": "Dairy"}))
        .await;
    let uri = format!("/api/v1/categories/{}", id);

    let (status, _) = app.put_json(&uri, json!({"name": "Dairy & Eggs"})).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app.get(&uri).await;
    assert_eq!(body["name"], "Dairy & Eggs");

    let (status, _) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
