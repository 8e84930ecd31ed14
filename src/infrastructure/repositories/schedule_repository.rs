//! Schedule Repository Implementation
//!
//! One schedule per store. Reads and updates go through `store_id`.

use async_trait::async_trait;
use sqlx::PgPool;

use super::map_write_error;
use crate::domain::{Schedule, ScheduleRepository, ScheduleUpdate};
use crate::infrastructure::database::PatchQuery;
use crate::infrastructure::metrics::time_query;
use crate::shared::error::AppError;

/// PostgreSQL schedule repository implementation.
#[derive(Clone)]
pub struct PgScheduleRepository {
    pool: PgPool,
}

impl PgScheduleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleRepository for PgScheduleRepository {
    async fn create(&self, schedule: &Schedule) -> Result<String, AppError> {
        let _timer = time_query("create", "schedules");

        let id = sqlx::query_scalar::<_, String>(
            r#"
            INSERT INTO schedules (store_id, periods, is_active)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&schedule.store_id)
        .bind(schedule.periods.as_deref())
        .bind(schedule.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Schedule"))?;

        Ok(id)
    }

    async fn get(&self, store_id: &str) -> Result<Option<Schedule>, AppError> {
        let _timer = time_query("get", "schedules");

        let schedule = sqlx::query_as::<_, Schedule>(
            r#"
            SELECT id, store_id, periods, is_active, created_at, updated_at
            FROM schedules
            WHERE store_id = $1
            "#,
        )
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(schedule)
    }

    async fn update(&self, store_id: &str, update: &ScheduleUpdate) -> Result<(), AppError> {
        let _timer = time_query("update", "schedules");

        let mut patch = PatchQuery::new("schedules");
        patch
            .set("periods", update.periods.as_deref())
            .set("is_active", update.is_active);

        if !patch.execute(&self.pool, "store_id", store_id).await? {
            return Err(AppError::not_found("Schedule of store", store_id));
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let _timer = time_query("delete", "schedules");

        let result = sqlx::query("DELETE FROM schedules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Schedule", id));
        }

        Ok(())
    }
}
