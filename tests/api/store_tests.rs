//! Store API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::TestApp;

fn corner_store(city_id: &str) -> Value {
    json!({
        "merchantID": "merchant-1",
        "cityID": city_id,
        "name": "Corner",
        "address": "Abay 1",
        "location": "43.238,76.945",
        "rating": "4.5"
    })
}

/// Country, city and currency for a store to point at. Returns the city id.
async fn almaty(app: &TestApp) -> String {
    let country = app
        .create("/api/v1/countries", json!({"name": "Kazakhstan"}))
        .await;
    app.create(
        "/api/v1/currencies",
        json!({"country_id": country, "sign": "₸", "decimals": "2"}),
    )
    .await;
    app.create(
        "/api/v1/cities",
        json!({"country_id": country, "name": "Almaty", "geocenter": "43.238,76.945"}),
    )
    .await
}

#[tokio::test]
async fn test_store_without_details_reads_back() {
    let app = TestApp::new();
    let id = app.create("/api/v1/stores", corner_store("nowhere")).await;

    let (status, body) = app.get(&format!("/api/v1/stores/{}", id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Corner");
    assert_eq!(body["rating"], "4.5");
    assert!(body.get("city").is_none());
    assert!(body.get("schedule").is_none());
    assert!(body.get("delivery").is_none());
}

#[tokio::test]
async fn test_store_aggregate_includes_locality() {
    let app = TestApp::new();
    let city = almaty(&app).await;
    let id = app.create("/api/v1/stores", corner_store(&city)).await;

    let (_, body) = app.get(&format!("/api/v1/stores/{}", id)).await;

    assert_eq!(body["city"]["name"], "Almaty");
    assert_eq!(body["country"]["name"], "Kazakhstan");
    assert_eq!(body["currency"]["sign"], "₸");
}

#[tokio::test]
async fn test_update_with_schedule_creates_it() {
    let app = TestApp::new();
    let id = app.create("/api/v1/stores", corner_store("nowhere")).await;
    let uri = format!("/api/v1/stores/{}", id);

    let (status, _) = app
        .put_json(
            &uri,
            json!({
                "schedule": {
                    "periods": [{"day": "mon", "from": "09:00", "to": "21:00"}]
                }
            }),
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app.get(&uri).await;
    assert_eq!(body["schedule"]["isActive"], true);
    assert_eq!(
        body["schedule"]["periods"],
        json!([{"day": "mon", "from": "09:00", "to": "21:00"}])
    );
    assert!(body.get("delivery").is_none());
}

#[tokio::test]
async fn test_update_with_delivery_then_deactivate() {
    let app = TestApp::new();
    let id = app.create("/api/v1/stores", corner_store("nowhere")).await;
    let uri = format!("/api/v1/stores/{}", id);

    app.put_json(
        &uri,
        json!({
            "delivery": {
                "periods": [{"day": "sat", "from": "10:00", "to": "16:00"}],
                "areas": [{"latitude": "43.2", "longitude": "76.9"}]
            }
        }),
    )
    .await;
    app.put_json(&uri, json!({"delivery": {"isActive": false}}))
        .await;

    let (_, body) = app.get(&uri).await;
    assert_eq!(body["delivery"]["isActive"], false);
    assert_eq!(body["delivery"]["areas"][0]["latitude"], "43.2");
    assert_eq!(body["delivery"]["periods"][0]["day"], "sat");
}

#[tokio::test]
async fn test_update_store_fields_and_city() {
    let app = TestApp::new();
    let city = almaty(&app).await;
    let id = app.create("/api/v1/stores", corner_store(&city)).await;
    let uri = format!("/api/v1/stores/{}", id);

    let (status, _) = app
        .put_json(
            &uri,
            json!({"address": "Abay 2", "city": {"geocenter": "43.25,76.95"}}),
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app.get(&uri).await;
    assert_eq!(body["address"], "Abay 2");
    assert_eq!(body["name"], "Corner");
    assert_eq!(body["city"]["geocenter"], "43.25,76.95");
    assert_eq!(body["city"]["name"], "Almaty");
}

#[tokio::test]
async fn test_list_stores_assembles_each() {
    let app = TestApp::new();
    let city = almaty(&app).await;
    app.create("/api/v1/stores", corner_store(&city)).await;
    app.create("/api/v1/stores", corner_store("nowhere")).await;

    let (status, body) = app.get("/api/v1/stores").await;

    assert_eq!(status, StatusCode::OK);
    let stores = body.as_array().unwrap();
    assert_eq!(stores.len(), 2);
    assert_eq!(stores[0]["city"]["name"], "Almaty");
    assert!(stores[1].get("city").is_none());
}

#[tokio::test]
async fn test_create_requires_location() {
    let app = TestApp::new();
    let mut body = corner_store("c-1");
    body.as_object_mut().unwrap().remove("location");

    let (status, body) = app.post_json("/api/v1/stores", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "location: cannot be blank");
}

#[tokio::test]
async fn test_create_reports_missing_merchant_by_json_name() {
    let app = TestApp::new();
    let mut body = corner_store("c-1");
    body.as_object_mut().unwrap().remove("merchantID");

    let (status, body) = app.post_json("/api/v1/stores", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "merchantID: cannot be blank");
}

#[tokio::test]
async fn test_blank_city_name_in_update_names_nested_field() {
    let app = TestApp::new();
    let id = app.create("/api/v1/stores", corner_store("nowhere")).await;

    let (status, body) = app
        .put_json(
            &format!("/api/v1/stores/{}", id),
            json!({"city": {"name": "  "}}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 10007);
    assert_eq!(body["message"], "city.name: cannot be blank");
}

#[tokio::test]
async fn test_delete_store_removes_its_rows() {
    let app = TestApp::new();
    let id = app.create("/api/v1/stores", corner_store("nowhere")).await;
    let other = app.create("/api/v1/stores", corner_store("nowhere")).await;
    for store_id in [&id, &other] {
        app.create(
            "/api/v1/inventories",
            json!({
                "store_id": store_id,
                "product_id": "product-1",
                "quantity": 1,
                "price": "100.00"
            }),
        )
        .await;
    }
    let uri = format!("/api/v1/stores/{}", id);
    app.put_json(
        &uri,
        json!({
            "schedule": {"periods": [{"day": "mon", "from": "09:00", "to": "21:00"}]},
            "delivery": {"areas": []}
        }),
    )
    .await;

    let (status, _) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app.get("/api/v1/inventories").await;
    let inventories = body.as_array().unwrap();
    assert_eq!(inventories.len(), 1);
    assert_eq!(inventories[0]["store_id"], other.as_str());
}
