//! Response DTOs
//!
//! Data structures for API response bodies. Optional entity columns are
//! flattened to concrete values; nested detail records of a store are
//! omitted when absent.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{
    Area, Category, City, Country, Currency, Delivery, Inventory, Period, Product, Schedule,
    Store,
};
use crate::shared::blob;

/// Category with its direct children
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResponse {
    pub id: String,

    #[serde(rename = "parentID", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    pub name: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CategoryResponse>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            parent_id: category.parent_id,
            name: category.name.unwrap_or_default(),
            children: Vec::new(),
        }
    }
}

/// Product response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub description: String,
    pub measure: String,
    pub image_url: String,
    pub country: String,
    pub barcode: String,
    pub brand: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            category_id: product.category_id,
            name: product.name.unwrap_or_default(),
            description: product.description.unwrap_or_default(),
            measure: product.measure.unwrap_or_default(),
            image_url: product.image_url.unwrap_or_default(),
            country: product.country.unwrap_or_default(),
            barcode: product.barcode.unwrap_or_default(),
            brand: product.brand.unwrap_or_default(),
        }
    }
}

/// Country response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryResponse {
    pub id: String,
    pub name: String,
}

impl From<Country> for CountryResponse {
    fn from(country: Country) -> Self {
        Self {
            id: country.id,
            name: country.name.unwrap_or_default(),
        }
    }
}

/// City response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityResponse {
    pub id: String,
    pub country_id: String,
    pub name: String,
    pub geocenter: String,
}

impl From<City> for CityResponse {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            country_id: city.country_id,
            name: city.name.unwrap_or_default(),
            geocenter: city.geocenter.unwrap_or_default(),
        }
    }
}

/// Currency response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyResponse {
    pub id: String,
    pub country_id: String,
    pub sign: String,
    pub decimals: String,
    pub prefix: bool,
}

impl From<Currency> for CurrencyResponse {
    fn from(currency: Currency) -> Self {
        Self {
            id: currency.id,
            country_id: currency.country_id,
            sign: currency.sign.unwrap_or_default(),
            decimals: currency.decimals.unwrap_or_default(),
            prefix: currency.prefix,
        }
    }
}

/// Opening hours of a store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleResponse {
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub periods: Vec<Period>,
}

impl From<Schedule> for ScheduleResponse {
    fn from(schedule: Schedule) -> Self {
        Self {
            is_active: schedule.is_active,
            periods: blob::decode(schedule.periods.as_deref(), "schedules.periods"),
        }
    }
}

/// Delivery hours and zones of a store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryResponse {
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub periods: Vec<Period>,
    pub areas: Vec<Area>,
}

impl From<Delivery> for DeliveryResponse {
    fn from(delivery: Delivery) -> Self {
        Self {
            is_active: delivery.is_active,
            periods: blob::decode(delivery.periods.as_deref(), "deliveries.periods"),
            areas: blob::decode(delivery.areas.as_deref(), "deliveries.areas"),
        }
    }
}

/// Store aggregate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreResponse {
    pub id: String,

    #[serde(rename = "merchantID")]
    pub merchant_id: String,

    #[serde(rename = "cityID")]
    pub city_id: String,

    pub name: String,
    pub address: String,
    pub location: String,
    pub rating: Decimal,

    #[serde(rename = "isActive")]
    pub is_active: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<CityResponse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<CountryResponse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyResponse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleResponse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<DeliveryResponse>,
}

impl From<Store> for StoreResponse {
    fn from(store: Store) -> Self {
        Self {
            id: store.id,
            merchant_id: store.merchant_id,
            city_id: store.city_id,
            name: store.name.unwrap_or_default(),
            address: store.address.unwrap_or_default(),
            location: store.location.unwrap_or_default(),
            rating: store.rating.unwrap_or_default(),
            is_active: store.is_active.unwrap_or_default(),
            city: None,
            country: None,
            currency: None,
            schedule: None,
            delivery: None,
        }
    }
}

/// Inventory response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryResponse {
    pub id: String,
    pub store_id: String,
    pub product_id: String,
    pub quantity: i32,
    pub quantity_min: i32,
    pub quantity_max: i32,
    pub price: Decimal,
    pub price_special: Decimal,
    pub price_previous: Decimal,
    pub is_available: bool,
}

impl From<Inventory> for InventoryResponse {
    fn from(inventory: Inventory) -> Self {
        Self {
            id: inventory.id,
            store_id: inventory.store_id,
            product_id: inventory.product_id,
            quantity: inventory.quantity.unwrap_or_default(),
            quantity_min: inventory.quantity_min.unwrap_or_default(),
            quantity_max: inventory.quantity_max.unwrap_or_default(),
            price: inventory.price.unwrap_or_default(),
            price_special: inventory.price_special.unwrap_or_default(),
            price_previous: inventory.price_previous.unwrap_or_default(),
            is_available: inventory.is_available.unwrap_or_default(),
        }
    }
}
