//! Country, City and Currency API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_currency_is_addressed_by_country() {
    let app = TestApp::new();
    let country = app
        .create("/api/v1/countries", json!({"name": "Kazakhstan"}))
        .await;
    let currency = app
        .create(
            "/api/v1/currencies",
            json!({"country_id": country, "sign": "₸", "decimals": "2"}),
        )
        .await;
    let by_country = format!("/api/v1/currencies/{}", country);

    let (status, _) = app.put_json(&by_country, json!({"prefix": true})).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.get(&by_country).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], currency.as_str());
    assert_eq!(body["prefix"], true);
    assert_eq!(body["sign"], "₸");

    let (status, _) = app.delete(&format!("/api/v1/currencies/{}", currency)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = app.get(&by_country).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_second_currency_for_country_is_rejected() {
    let app = TestApp::new();
    let body = json!({"country_id": "kz", "sign": "₸", "decimals": "2"});
    app.create("/api/v1/currencies", body.clone()).await;

    let (status, _) = app.post_json("/api/v1/currencies", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_city_update_and_list() {
    let app = TestApp::new();
    let id = app
        .create(
            "/api/v1/cities",
            json!({"country_id": "kz", "name": "Astana", "geocenter": "51.16,71.47"}),
        )
        .await;

    let (status, _) = app
        .put_json(&format!("/api/v1/cities/{}", id), json!({"name": "Nur-Sultan"}))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.get("/api/v1/cities").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Nur-Sultan");
    assert_eq!(body[0]["geocenter"], "51.16,71.47");
}

#[tokio::test]
async fn test_countries_are_listed_by_name() {
    let app = TestApp::new();
    app.create("/api/v1/countries", json!({"name": "Uzbekistan"}))
        .await;
    app.create("/api/v1/countries", json!({"name": "Kazakhstan"}))
        .await;

    let (_, body) = app.get("/api/v1/countries").await;

    assert_eq!(body[0]["name"], "Kazakhstan");
    assert_eq!(body[1]["name"], "Uzbekistan");
}
