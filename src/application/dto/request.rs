//! Request DTOs
//!
//! Data structures for API request bodies.
//!
//! Required string fields default to empty when missing so that the
//! validator, not the JSON decoder, reports them as `"<field>: cannot be blank"`.

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::domain::{
    Area, Category, CategoryUpdate, City, CityUpdate, Country, CountryUpdate, Currency,
    CurrencyUpdate, Inventory, InventoryUpdate, Period, Product, ProductUpdate, Store,
    StoreUpdate,
};
use crate::shared::validation::not_blank;

/// Create or rename a category
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CategoryRequest {
    #[serde(rename = "parentID", default)]
    pub parent_id: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
}

impl CategoryRequest {
    pub fn into_entity(self) -> Category {
        let parent_id = self.parent_id.filter(|id| !id.is_empty());
        Category::new(parent_id, self.name)
    }

    /// Only the name is patched; `parentID` is ignored on update.
    pub fn into_update(self) -> CategoryUpdate {
        CategoryUpdate {
            name: Some(self.name),
        }
    }
}

/// Create product request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProductRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub category_id: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    pub description: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub measure: String,

    pub image_url: Option<String>,
    pub country: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub barcode: String,

    pub brand: Option<String>,
}

impl From<ProductRequest> for Product {
    fn from(req: ProductRequest) -> Self {
        Product {
            category_id: req.category_id,
            name: Some(req.name),
            description: req.description,
            measure: Some(req.measure),
            image_url: req.image_url,
            country: req.country,
            barcode: Some(req.barcode),
            brand: req.brand,
            ..Product::default()
        }
    }
}

/// Update product request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(custom(function = "not_blank"))]
    pub category_id: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub measure: Option<String>,

    pub image_url: Option<String>,
    pub country: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub barcode: Option<String>,

    pub brand: Option<String>,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(req: UpdateProductRequest) -> Self {
        ProductUpdate {
            category_id: req.category_id,
            name: req.name,
            description: req.description,
            measure: req.measure,
            image_url: req.image_url,
            country: req.country,
            barcode: req.barcode,
            brand: req.brand,
        }
    }
}

/// Create store request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct StoreRequest {
    #[serde(rename = "merchantID", default)]
    #[validate(custom(function = "not_blank"))]
    pub merchant_id: String,

    #[serde(rename = "cityID", default)]
    #[validate(custom(function = "not_blank"))]
    pub city_id: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub address: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub location: String,

    pub rating: Option<Decimal>,

    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,
}

impl From<StoreRequest> for Store {
    fn from(req: StoreRequest) -> Self {
        Store {
            merchant_id: req.merchant_id,
            city_id: req.city_id,
            name: Some(req.name),
            address: Some(req.address),
            location: Some(req.location),
            rating: req.rating,
            is_active: Some(req.is_active.unwrap_or(true)),
            ..Store::default()
        }
    }
}

/// City section of a store update
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct StoreCitySection {
    #[validate(custom(function = "not_blank"))]
    pub country_id: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub name: Option<String>,

    pub geocenter: Option<String>,
}

impl From<StoreCitySection> for CityUpdate {
    fn from(section: StoreCitySection) -> Self {
        CityUpdate {
            country_id: section.country_id,
            name: section.name,
            geocenter: section.geocenter,
        }
    }
}

/// Schedule section of a store update
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreScheduleSection {
    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,

    pub periods: Option<Vec<Period>>,
}

/// Delivery section of a store update
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreDeliverySection {
    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,

    pub periods: Option<Vec<Period>>,
    pub areas: Option<Vec<Area>>,
}

/// Update store request
///
/// The store's own fields are merge-patched; each nested section that is
/// present updates (or creates) the matching detail record.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStoreRequest {
    #[serde(rename = "cityID")]
    #[validate(custom(function = "not_blank"))]
    pub city_id: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub name: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub address: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub location: Option<String>,

    pub rating: Option<Decimal>,

    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,

    #[validate(nested)]
    pub city: Option<StoreCitySection>,

    pub schedule: Option<StoreScheduleSection>,
    pub delivery: Option<StoreDeliverySection>,
}

impl UpdateStoreRequest {
    /// The patch over the store row itself.
    pub fn store_update(&self) -> StoreUpdate {
        StoreUpdate {
            city_id: self.city_id.clone(),
            name: self.name.clone(),
            address: self.address.clone(),
            location: self.location.clone(),
            rating: self.rating,
            is_active: self.is_active,
        }
    }
}

/// Create or rename a country
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CountryRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
}

impl CountryRequest {
    pub fn into_entity(self) -> Country {
        Country::new(self.name)
    }

    pub fn into_update(self) -> CountryUpdate {
        CountryUpdate {
            name: Some(self.name),
        }
    }
}

/// Create city request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CityRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub country_id: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub geocenter: String,
}

impl From<CityRequest> for City {
    fn from(req: CityRequest) -> Self {
        City::new(req.country_id, Some(req.name), Some(req.geocenter))
    }
}

/// Update city request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCityRequest {
    #[validate(custom(function = "not_blank"))]
    pub country_id: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub name: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub geocenter: Option<String>,
}

impl From<UpdateCityRequest> for CityUpdate {
    fn from(req: UpdateCityRequest) -> Self {
        CityUpdate {
            country_id: req.country_id,
            name: req.name,
            geocenter: req.geocenter,
        }
    }
}

/// Create currency request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CurrencyRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub country_id: String,

    #[serde(default, alias = "sing")]
    #[validate(custom(function = "not_blank"))]
    pub sign: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub decimals: String,

    #[serde(default)]
    pub prefix: bool,
}

impl From<CurrencyRequest> for Currency {
    fn from(req: CurrencyRequest) -> Self {
        Currency {
            country_id: req.country_id,
            sign: Some(req.sign),
            decimals: Some(req.decimals),
            prefix: req.prefix,
            ..Currency::default()
        }
    }
}

/// Update currency request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCurrencyRequest {
    #[serde(alias = "sing")]
    #[validate(custom(function = "not_blank"))]
    pub sign: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub decimals: Option<String>,

    pub prefix: Option<bool>,
}

impl From<UpdateCurrencyRequest> for CurrencyUpdate {
    fn from(req: UpdateCurrencyRequest) -> Self {
        CurrencyUpdate {
            sign: req.sign,
            decimals: req.decimals,
            prefix: req.prefix,
        }
    }
}

/// Create inventory request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct InventoryRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub store_id: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub product_id: String,

    #[validate(required(message = "cannot be blank"))]
    pub quantity: Option<i32>,

    pub quantity_min: Option<i32>,
    pub quantity_max: Option<i32>,

    #[validate(required(message = "cannot be blank"))]
    pub price: Option<Decimal>,

    pub price_special: Option<Decimal>,
    pub price_previous: Option<Decimal>,
    pub is_available: Option<bool>,
}

impl From<InventoryRequest> for Inventory {
    fn from(req: InventoryRequest) -> Self {
        Inventory {
            store_id: req.store_id,
            product_id: req.product_id,
            quantity: req.quantity,
            quantity_min: req.quantity_min,
            quantity_max: req.quantity_max,
            price: req.price,
            price_special: req.price_special,
            price_previous: req.price_previous,
            is_available: req.is_available,
            ..Inventory::default()
        }
    }
}

/// Update inventory request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateInventoryRequest {
    pub quantity: Option<i32>,
    pub quantity_min: Option<i32>,
    pub quantity_max: Option<i32>,
    pub price: Option<Decimal>,
    pub price_special: Option<Decimal>,
    pub price_previous: Option<Decimal>,
    pub is_available: Option<bool>,
}

impl From<UpdateInventoryRequest> for InventoryUpdate {
    fn from(req: UpdateInventoryRequest) -> Self {
        InventoryUpdate {
            quantity: req.quantity,
            quantity_min: req.quantity_min,
            quantity_max: req.quantity_max,
            price: req.price,
            price_special: req.price_special,
            price_previous: req.price_previous,
            is_available: req.is_available,
        }
    }
}
