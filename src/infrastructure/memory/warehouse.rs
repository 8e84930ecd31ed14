use async_trait::async_trait;

use super::{MemoryDeliveryRepository, MemoryScheduleRepository, MemoryTable};
use crate::domain::{
    Delivery, Inventory, InventoryRepository, InventoryUpdate, Schedule, Store, StoreRepository,
    StoreUpdate,
};
use crate::shared::error::AppError;

/// Stores, plus handles to the rows that belong to a store.
#[derive(Default)]
pub struct MemoryStoreRepository {
    table: MemoryTable<Store>,
    schedules: MemoryTable<Schedule>,
    deliveries: MemoryTable<Delivery>,
    inventories: MemoryTable<Inventory>,
}

impl MemoryStoreRepository {
    /// A store repository whose deletes also clear the store's schedule,
    /// delivery and inventory rows in the given repositories.
    pub fn cascading(
        schedules: &MemoryScheduleRepository,
        deliveries: &MemoryDeliveryRepository,
        inventories: &MemoryInventoryRepository,
    ) -> Self {
        Self {
            table: MemoryTable::default(),
            schedules: schedules.table.clone(),
            deliveries: deliveries.table.clone(),
            inventories: inventories.table.clone(),
        }
    }
}

#[async_trait]
impl StoreRepository for MemoryStoreRepository {
    async fn select(&self) -> Result<Vec<Store>, AppError> {
        Ok(self.table.all())
    }

    async fn create(&self, store: &Store) -> Result<String, AppError> {
        Ok(self.table.insert(store))
    }

    async fn get(&self, id: &str) -> Result<Store, AppError> {
        self.table
            .find_by_id(id)
            .ok_or_else(|| AppError::not_found("Store", id))
    }

    async fn update(&self, id: &str, update: &StoreUpdate) -> Result<(), AppError> {
        if !self.table.patch(|s| s.id == id, update) {
            return Err(AppError::not_found("Store", id));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.table.remove(id) {
            return Err(AppError::not_found("Store", id));
        }

        self.schedules.remove_where(|s| s.store_id == id);
        self.deliveries.remove_where(|d| d.store_id == id);
        let inventories = self.inventories.remove_where(|i| i.store_id == id);
        tracing::debug!(store_id = %id, inventories, "Removed rows of deleted store");
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryInventoryRepository {
    pub(super) table: MemoryTable<Inventory>,
}

#[async_trait]
impl InventoryRepository for MemoryInventoryRepository {
    async fn select(&self) -> Result<Vec<Inventory>, AppError> {
        Ok(self.table.all())
    }

    async fn create(&self, inventory: &Inventory) -> Result<String, AppError> {
        Ok(self.table.insert(inventory))
    }

    async fn get(&self, id: &str) -> Result<Inventory, AppError> {
        self.table
            .find_by_id(id)
            .ok_or_else(|| AppError::not_found("Inventory", id))
    }

    async fn update(&self, id: &str, update: &InventoryUpdate) -> Result<(), AppError> {
        if !self.table.patch(|i| i.id == id, update) {
            return Err(AppError::not_found("Inventory", id));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.table.remove(id) {
            return Err(AppError::not_found("Inventory", id));
        }
        Ok(())
    }
}
