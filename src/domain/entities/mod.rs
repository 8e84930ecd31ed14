//! # Domain Entities
//!
//! Core domain entities of the warehouse service. All entities map directly
//! to their corresponding database tables.
//!
//! ## Catalogue
//!
//! - **Category**: Product category tree (self-referencing `parent_id`)
//! - **Product**: Catalogue product belonging to a category
//!
//! ## Warehouse
//!
//! - **Store**: Physical store of a merchant, located in a city
//! - **Country / City / Currency**: Locality of a store
//! - **Schedule / Delivery**: 1:1 detail records of a store
//! - **Inventory**: Stock and price of a product in a store
//!
//! ## Partial Updates
//!
//! Every entity has a companion `…Update` patch. A `None` field means "not
//! provided" and is left untouched; see `PatchQuery` for the SQL side.
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, once for
//! PostgreSQL and once in memory.

mod category;
mod city;
mod country;
mod currency;
mod delivery;
mod inventory;
mod product;
mod schedule;
mod store;

pub use category::{Category, CategoryRepository, CategoryUpdate};
pub use city::{City, CityRepository, CityUpdate};
pub use country::{Country, CountryRepository, CountryUpdate};
pub use currency::{Currency, CurrencyRepository, CurrencyUpdate};
pub use delivery::{Area, Delivery, DeliveryRepository, DeliveryUpdate};
pub use inventory::{Inventory, InventoryRepository, InventoryUpdate};
pub use product::{Product, ProductRepository, ProductUpdate};
pub use schedule::{Period, Schedule, ScheduleRepository, ScheduleUpdate};
pub use store::{Store, StoreRepository, StoreUpdate};

/// Overwrite `target` only when the patch carries a value.
pub(crate) fn merge<T: Clone>(target: &mut Option<T>, patch: &Option<T>) {
    if let Some(value) = patch {
        *target = Some(value.clone());
    }
}
