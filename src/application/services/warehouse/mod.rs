//! Warehouse Service
//!
//! Stores with their locality (city, country, currency) and detail records
//! (schedule, delivery), and the inventory held by each store.
//!
//! - `store`: store CRUD, aggregate assembly and the multi-record update
//! - `inventory`: inventory CRUD
//! - `locality`: countries, cities and currencies

mod inventory;
mod locality;
mod store;

use std::sync::Arc;

use crate::domain::{
    CityRepository, CountryRepository, CurrencyRepository, DeliveryRepository,
    InventoryRepository, ScheduleRepository, StoreRepository,
};
use crate::infrastructure::Repositories;

/// Stores, locality and inventory.
#[derive(Clone)]
pub struct WarehouseService {
    stores: Arc<dyn StoreRepository>,
    countries: Arc<dyn CountryRepository>,
    cities: Arc<dyn CityRepository>,
    currencies: Arc<dyn CurrencyRepository>,
    schedules: Arc<dyn ScheduleRepository>,
    deliveries: Arc<dyn DeliveryRepository>,
    inventories: Arc<dyn InventoryRepository>,
}

impl WarehouseService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            stores: repositories.stores.clone(),
            countries: repositories.countries.clone(),
            cities: repositories.cities.clone(),
            currencies: repositories.currencies.clone(),
            schedules: repositories.schedules.clone(),
            deliveries: repositories.deliveries.clone(),
            inventories: repositories.inventories.clone(),
        }
    }
}
