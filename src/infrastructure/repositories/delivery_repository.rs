//! Delivery Repository Implementation
//!
//! One delivery record per store. Reads and updates go through `store_id`.

use async_trait::async_trait;
use sqlx::PgPool;

use super::map_write_error;
use crate::domain::{Delivery, DeliveryRepository, DeliveryUpdate};
use crate::infrastructure::database::PatchQuery;
use crate::infrastructure::metrics::time_query;
use crate::shared::error::AppError;

/// PostgreSQL delivery repository implementation.
#[derive(Clone)]
pub struct PgDeliveryRepository {
    pool: PgPool,
}

impl PgDeliveryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeliveryRepository for PgDeliveryRepository {
    async fn create(&self, delivery: &Delivery) -> Result<String, AppError> {
        let _timer = time_query("create", "deliveries");

        let id = sqlx::query_scalar::<_, String>(
            r#"
            INSERT INTO deliveries (store_id, periods, areas, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&delivery.store_id)
        .bind(delivery.periods.as_deref())
        .bind(delivery.areas.as_deref())
        .bind(delivery.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Delivery"))?;

        Ok(id)
    }

    async fn get(&self, store_id: &str) -> Result<Option<Delivery>, AppError> {
        let _timer = time_query("get", "deliveries");

        let delivery = sqlx::query_as::<_, Delivery>(
            r#"
            SELECT id, store_id, periods, areas, is_active, created_at, updated_at
            FROM deliveries
            WHERE store_id = $1
            "#,
        )
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(delivery)
    }

    async fn update(&self, store_id: &str, update: &DeliveryUpdate) -> Result<(), AppError> {
        let _timer = time_query("update", "deliveries");

        let mut patch = PatchQuery::new("deliveries");
        patch
            .set("periods", update.periods.as_deref())
            .set("areas", update.areas.as_deref())
            .set("is_active", update.is_active);

        if !patch.execute(&self.pool, "store_id", store_id).await? {
            return Err(AppError::not_found("Delivery of store", store_id));
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let _timer = time_query("delete", "deliveries");

        let result = sqlx::query("DELETE FROM deliveries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Delivery", id));
        }

        Ok(())
    }
}
