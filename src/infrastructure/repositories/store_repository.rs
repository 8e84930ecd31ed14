//! Store Repository Implementation
//!
//! PostgreSQL implementation of the StoreRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;

use super::map_write_error;
use crate::domain::{Store, StoreRepository, StoreUpdate};
use crate::infrastructure::database::PatchQuery;
use crate::infrastructure::metrics::time_query;
use crate::shared::error::AppError;

/// PostgreSQL store repository implementation.
#[derive(Clone)]
pub struct PgStoreRepository {
    pool: PgPool,
}

impl PgStoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreRepository for PgStoreRepository {
    async fn select(&self) -> Result<Vec<Store>, AppError> {
        let _timer = time_query("select", "stores");

        let rows = sqlx::query_as::<_, Store>(
            r#"
            SELECT id, merchant_id, city_id, name, address, location, rating, is_active,
                   created_at, updated_at
            FROM stores
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn create(&self, store: &Store) -> Result<String, AppError> {
        let _timer = time_query("create", "stores");

        let id = sqlx::query_scalar::<_, String>(
            r#"
            INSERT INTO stores (merchant_id, city_id, name, address, location, rating, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&store.merchant_id)
        .bind(&store.city_id)
        .bind(&store.name)
        .bind(&store.address)
        .bind(&store.location)
        .bind(store.rating)
        .bind(store.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Store"))?;

        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<Store, AppError> {
        let _timer = time_query("get", "stores");

        sqlx::query_as::<_, Store>(
            r#"
            SELECT id, merchant_id, city_id, name, address, location, rating, is_active,
                   created_at, updated_at
            FROM stores
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::not_found("Store", id))
    }

    async fn update(&self, id: &str, update: &StoreUpdate) -> Result<(), AppError> {
        let _timer = time_query("update", "stores");

        let mut patch = PatchQuery::new("stores");
        patch
            .set("city_id", update.city_id.as_deref())
            .set("name", update.name.as_deref())
            .set("address", update.address.as_deref())
            .set("location", update.location.as_deref())
            .set("rating", update.rating)
            .set("is_active", update.is_active);

        let found = patch
            .execute(&self.pool, "id", id)
            .await
            .map_err(|e| map_write_error(e, "Store"))?;
        if !found {
            return Err(AppError::not_found("Store", id));
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let _timer = time_query("delete", "stores");

        let result = sqlx::query("DELETE FROM stores WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Store", id));
        }

        Ok(())
    }
}
