//! Application Services
//!
//! Business logic services that coordinate repository operations.
//!
//! ## Available Services
//!
//! - **CatalogueService**: Category tree and products
//! - **WarehouseService**: Stores with their locality and details, inventory

pub mod catalogue_service;
pub mod warehouse;

pub use catalogue_service::CatalogueService;
pub use warehouse::WarehouseService;
