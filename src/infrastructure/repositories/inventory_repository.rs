//! Inventory Repository Implementation
//!
//! Stock and prices of a product in a store.

use async_trait::async_trait;
use sqlx::PgPool;

use super::map_write_error;
use crate::domain::{Inventory, InventoryRepository, InventoryUpdate};
use crate::infrastructure::database::PatchQuery;
use crate::infrastructure::metrics::time_query;
use crate::shared::error::AppError;

/// PostgreSQL inventory repository implementation.
#[derive(Clone)]
pub struct PgInventoryRepository {
    pool: PgPool,
}

impl PgInventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryRepository for PgInventoryRepository {
    async fn select(&self) -> Result<Vec<Inventory>, AppError> {
        let _timer = time_query("select", "inventories");

        let rows = sqlx::query_as::<_, Inventory>(
            r#"
            SELECT id, store_id, product_id, quantity, quantity_min, quantity_max,
                   price, price_special, price_previous, is_available,
                   created_at, updated_at
            FROM inventories
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn create(&self, inventory: &Inventory) -> Result<String, AppError> {
        let _timer = time_query("create", "inventories");

        let id = sqlx::query_scalar::<_, String>(
            r#"
            INSERT INTO inventories (store_id, product_id, quantity, quantity_min, quantity_max,
                                     price, price_special, price_previous, is_available)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(&inventory.store_id)
        .bind(&inventory.product_id)
        .bind(inventory.quantity)
        .bind(inventory.quantity_min)
        .bind(inventory.quantity_max)
        .bind(inventory.price)
        .bind(inventory.price_special)
        .bind(inventory.price_previous)
        .bind(inventory.is_available)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Inventory"))?;

        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<Inventory, AppError> {
        let _timer = time_query("get", "inventories");

        sqlx::query_as::<_, Inventory>(
            r#"
            SELECT id, store_id, product_id, quantity, quantity_min, quantity_max,
                   price, price_special, price_previous, is_available,
                   created_at, updated_at
            FROM inventories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::not_found("Inventory", id))
    }

    async fn update(&self, id: &str, update: &InventoryUpdate) -> Result<(), AppError> {
        let _timer = time_query("update", "inventories");

        let mut patch = PatchQuery::new("inventories");
        patch
            .set("quantity", update.quantity)
            .set("quantity_min", update.quantity_min)
            .set("quantity_max", update.quantity_max)
            .set("price", update.price)
            .set("price_special", update.price_special)
            .set("price_previous", update.price_previous)
            .set("is_available", update.is_available);

        if !patch.execute(&self.pool, "id", id).await? {
            return Err(AppError::not_found("Inventory", id));
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let _timer = time_query("delete", "inventories");

        let result = sqlx::query("DELETE FROM inventories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Inventory", id));
        }

        Ok(())
    }
}
