//! Repository Implementations
//!
//! PostgreSQL implementations of the domain repository traits, plus the
//! [`Repositories`] bundle the services are built from.
//!
//! ## Available Repositories
//!
//! - **CategoryRepository** - Category tree (`parent_id` self reference)
//! - **ProductRepository** - Catalogue products
//! - **StoreRepository** - Merchant stores
//! - **CountryRepository / CityRepository** - Store locality
//! - **CurrencyRepository** - Currency of a country, keyed by `country_id`
//! - **ScheduleRepository / DeliveryRepository** - Store details, keyed by `store_id`
//! - **InventoryRepository** - Stock and prices per store
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! let repos = Repositories::postgres(pool);
//! let catalogue = CatalogueService::new(&repos);
//! ```

pub mod category_repository;
pub mod city_repository;
pub mod country_repository;
pub mod currency_repository;
pub mod delivery_repository;
pub mod inventory_repository;
pub mod product_repository;
pub mod schedule_repository;
pub mod store_repository;

use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::{
    CategoryRepository, CityRepository, CountryRepository, CurrencyRepository,
    DeliveryRepository, InventoryRepository, ProductRepository, ScheduleRepository,
    StoreRepository,
};
use crate::infrastructure::memory;
use crate::shared::error::AppError;

pub use category_repository::PgCategoryRepository;
pub use city_repository::PgCityRepository;
pub use country_repository::PgCountryRepository;
pub use currency_repository::PgCurrencyRepository;
pub use delivery_repository::PgDeliveryRepository;
pub use inventory_repository::PgInventoryRepository;
pub use product_repository::PgProductRepository;
pub use schedule_repository::PgScheduleRepository;
pub use store_repository::PgStoreRepository;

/// One handle per repository trait, shared by the services.
#[derive(Clone)]
pub struct Repositories {
    pub categories: Arc<dyn CategoryRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub stores: Arc<dyn StoreRepository>,
    pub countries: Arc<dyn CountryRepository>,
    pub cities: Arc<dyn CityRepository>,
    pub currencies: Arc<dyn CurrencyRepository>,
    pub schedules: Arc<dyn ScheduleRepository>,
    pub deliveries: Arc<dyn DeliveryRepository>,
    pub inventories: Arc<dyn InventoryRepository>,
}

impl Repositories {
    /// PostgreSQL-backed repositories sharing one pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            categories: Arc::new(PgCategoryRepository::new(pool.clone())),
            products: Arc::new(PgProductRepository::new(pool.clone())),
            stores: Arc::new(PgStoreRepository::new(pool.clone())),
            countries: Arc::new(PgCountryRepository::new(pool.clone())),
            cities: Arc::new(PgCityRepository::new(pool.clone())),
            currencies: Arc::new(PgCurrencyRepository::new(pool.clone())),
            schedules: Arc::new(PgScheduleRepository::new(pool.clone())),
            deliveries: Arc::new(PgDeliveryRepository::new(pool.clone())),
            inventories: Arc::new(PgInventoryRepository::new(pool)),
        }
    }

    /// Process-local repositories. Nothing survives a restart.
    ///
    /// Deleting a store removes its schedule, delivery and inventory rows,
    /// matching the cascades of the PostgreSQL schema.
    pub fn memory() -> Self {
        let schedules = memory::MemoryScheduleRepository::default();
        let deliveries = memory::MemoryDeliveryRepository::default();
        let inventories = memory::MemoryInventoryRepository::default();
        let stores = memory::MemoryStoreRepository::cascading(&schedules, &deliveries, &inventories);

        Self {
            categories: Arc::new(memory::MemoryCategoryRepository::default()),
            products: Arc::new(memory::MemoryProductRepository::default()),
            stores: Arc::new(stores),
            countries: Arc::new(memory::MemoryCountryRepository::default()),
            cities: Arc::new(memory::MemoryCityRepository::default()),
            currencies: Arc::new(memory::MemoryCurrencyRepository::default()),
            schedules: Arc::new(schedules),
            deliveries: Arc::new(deliveries),
            inventories: Arc::new(inventories),
        }
    }
}

/// Translate constraint violations on writes into client errors.
///
/// A dangling reference (unknown `category_id`, `store_id`, ...) or a second
/// detail row for the same parent is the caller's mistake, not ours.
pub(crate) fn map_write_error(e: sqlx::Error, entity: &str) -> AppError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_foreign_key_violation() {
            return AppError::BadRequest(format!(
                "{} references a record that does not exist or is still referenced",
                entity
            ));
        }
        if db.is_unique_violation() {
            return AppError::BadRequest(format!("{} already exists", entity));
        }
    }
    AppError::Database(e)
}
