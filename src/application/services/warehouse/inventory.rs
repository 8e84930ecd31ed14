use super::WarehouseService;
use crate::application::dto::{InventoryRequest, InventoryResponse, UpdateInventoryRequest};
use crate::domain::{Inventory, InventoryUpdate};
use crate::shared::error::AppError;

impl WarehouseService {
    pub async fn list_inventories(&self) -> Result<Vec<InventoryResponse>, AppError> {
        let inventories = self.inventories.select().await?;
        Ok(inventories.into_iter().map(InventoryResponse::from).collect())
    }

    pub async fn add_inventory(&self, request: InventoryRequest) -> Result<InventoryResponse, AppError> {
        let mut inventory = Inventory::from(request);
        inventory.id = self.inventories.create(&inventory).await?;

        tracing::info!(
            inventory_id = %inventory.id,
            store_id = %inventory.store_id,
            product_id = %inventory.product_id,
            "Inventory created"
        );
        Ok(inventory.into())
    }

    pub async fn get_inventory(&self, id: &str) -> Result<InventoryResponse, AppError> {
        let inventory = self.inventories.get(id).await?;
        Ok(inventory.into())
    }

    /// Merge-patch an inventory record by its own id.
    pub async fn update_inventory(&self, id: &str, request: UpdateInventoryRequest) -> Result<(), AppError> {
        self.inventories.update(id, &InventoryUpdate::from(request)).await
    }

    pub async fn delete_inventory(&self, id: &str) -> Result<(), AppError> {
        self.inventories.delete(id).await?;
        tracing::info!(inventory_id = %id, "Inventory deleted");
        Ok(())
    }
}
