//! Warehouse Service Tests

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

use warehouse_service::application::dto::{
    CityRequest, CountryRequest, CurrencyRequest, InventoryRequest, StoreCitySection,
    StoreDeliverySection, StoreRequest, StoreScheduleSection, UpdateCurrencyRequest,
    UpdateInventoryRequest, UpdateStoreRequest,
};
use warehouse_service::application::services::WarehouseService;
use warehouse_service::domain::{Area, Period};
use warehouse_service::infrastructure::Repositories;

use crate::common::services;

fn store(city_id: &str) -> StoreRequest {
    StoreRequest {
        merchant_id: "merchant-1".into(),
        city_id: city_id.into(),
        name: "Corner".into(),
        address: "Abay 1".into(),
        location: "43.238,76.945".into(),
        rating: Some(Decimal::new(45, 1)),
        ..StoreRequest::default()
    }
}

fn period(day: &str) -> Period {
    Period {
        day: day.into(),
        from: "09:00".into(),
        to: "21:00".into(),
    }
}

async fn kazakhstan(warehouse: &WarehouseService) -> String {
    let country = warehouse
        .add_country(CountryRequest {
            name: "Kazakhstan".into(),
        })
        .await
        .unwrap();
    warehouse
        .add_currency(CurrencyRequest {
            country_id: country.id.clone(),
            sign: "₸".into(),
            decimals: "2".into(),
            prefix: false,
        })
        .await
        .unwrap();
    country.id
}

#[tokio::test]
async fn test_store_aggregate_before_and_after_update() {
    let (_, warehouse) = services();
    let country_id = kazakhstan(&warehouse).await;
    let city = warehouse
        .add_city(CityRequest {
            country_id,
            name: "Almaty".into(),
            geocenter: "43.238,76.945".into(),
        })
        .await
        .unwrap();
    let created = warehouse.add_store(store(&city.id)).await.unwrap();

    let before = warehouse.get_store(&created.id).await.unwrap();
    assert_eq!(before.city.as_ref().map(|c| c.name.as_str()), Some("Almaty"));
    assert_eq!(before.country.as_ref().map(|c| c.name.as_str()), Some("Kazakhstan"));
    assert_eq!(before.currency.as_ref().map(|c| c.sign.as_str()), Some("₸"));
    assert!(before.schedule.is_none());
    assert!(before.delivery.is_none());

    warehouse
        .update_store(
            &created.id,
            UpdateStoreRequest {
                name: Some("Corner 24".into()),
                schedule: Some(StoreScheduleSection {
                    is_active: None,
                    periods: Some(vec![period("mon"), period("tue")]),
                }),
                delivery: Some(StoreDeliverySection {
                    is_active: Some(false),
                    periods: None,
                    areas: Some(vec![Area {
                        latitude: "43.2".into(),
                        longitude: "76.9".into(),
                    }]),
                }),
                ..UpdateStoreRequest::default()
            },
        )
        .await
        .unwrap();

    let after = warehouse.get_store(&created.id).await.unwrap();
    assert_eq!(after.name, "Corner 24");
    assert_eq!(after.address, "Abay 1");
    assert_eq!(after.rating, Decimal::new(45, 1));

    let schedule = after.schedule.unwrap();
    assert!(schedule.is_active);
    assert_eq!(schedule.periods, vec![period("mon"), period("tue")]);

    let delivery = after.delivery.unwrap();
    assert!(!delivery.is_active);
    assert!(delivery.periods.is_empty());
    assert_eq!(delivery.areas.len(), 1);
}

#[tokio::test]
async fn test_city_section_creates_missing_city() {
    let (_, warehouse) = services();
    let country_id = kazakhstan(&warehouse).await;
    let created = warehouse.add_store(store("unknown-city")).await.unwrap();

    warehouse
        .update_store(
            &created.id,
            UpdateStoreRequest {
                city: Some(StoreCitySection {
                    country_id: Some(country_id),
                    name: Some("Shymkent".into()),
                    geocenter: Some("42.34,69.59".into()),
                }),
                ..UpdateStoreRequest::default()
            },
        )
        .await
        .unwrap();

    let store = warehouse.get_store(&created.id).await.unwrap();
    let city = store.city.unwrap();
    assert_eq!(store.city_id, city.id);
    assert_eq!(city.name, "Shymkent");
    assert_eq!(store.country.map(|c| c.name), Some("Kazakhstan".to_string()));
}

#[tokio::test]
async fn test_update_of_missing_store_writes_nothing() {
    let (_, warehouse) = services();

    let err = warehouse
        .update_store(
            "missing",
            UpdateStoreRequest {
                schedule: Some(StoreScheduleSection::default()),
                ..UpdateStoreRequest::default()
            },
        )
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_currency_follows_country() {
    let (_, warehouse) = services();
    let country_id = kazakhstan(&warehouse).await;

    warehouse
        .update_currency(
            &country_id,
            UpdateCurrencyRequest {
                prefix: Some(true),
                ..UpdateCurrencyRequest::default()
            },
        )
        .await
        .unwrap();

    let currency = warehouse.get_currency(&country_id).await.unwrap();
    assert!(currency.prefix);
    assert_eq!(currency.decimals, "2");
    assert!(warehouse.get_currency("elsewhere").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_inventory_update_is_partial() {
    let (_, warehouse) = services();
    let inventory = warehouse
        .add_inventory(InventoryRequest {
            store_id: "store-1".into(),
            product_id: "product-1".into(),
            quantity: Some(5),
            price: Some(Decimal::new(45000, 2)),
            ..InventoryRequest::default()
        })
        .await
        .unwrap();

    warehouse
        .update_inventory(
            &inventory.id,
            UpdateInventoryRequest {
                is_available: Some(true),
                ..UpdateInventoryRequest::default()
            },
        )
        .await
        .unwrap();

    let stored = warehouse.get_inventory(&inventory.id).await.unwrap();
    assert!(stored.is_available);
    assert_eq!(stored.quantity, 5);
    assert_eq!(stored.price, Decimal::new(45000, 2));
    assert_eq!(warehouse.list_inventories().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_deleting_missing_locality_is_not_found() {
    let (_, warehouse) = services();

    assert!(warehouse.delete_country("nope").await.unwrap_err().is_not_found());
    assert!(warehouse.delete_city("nope").await.unwrap_err().is_not_found());
    assert!(warehouse.delete_currency("nope").await.unwrap_err().is_not_found());
    assert!(warehouse.get_city("nope").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_deleting_store_clears_its_details() {
    let repositories = Repositories::memory();
    let warehouse = WarehouseService::new(&repositories);
    let created = warehouse.add_store(store("almaty")).await.unwrap();
    warehouse
        .update_store(
            &created.id,
            UpdateStoreRequest {
                schedule: Some(StoreScheduleSection::default()),
                delivery: Some(StoreDeliverySection::default()),
                ..UpdateStoreRequest::default()
            },
        )
        .await
        .unwrap();
    assert!(repositories.schedules.get(&created.id).await.unwrap().is_some());

    warehouse.delete_store(&created.id).await.unwrap();

    assert!(repositories.schedules.get(&created.id).await.unwrap().is_none());
    assert!(repositories.deliveries.get(&created.id).await.unwrap().is_none());
}
