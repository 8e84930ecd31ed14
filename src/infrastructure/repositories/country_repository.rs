//! Country Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;

use super::map_write_error;
use crate::domain::{Country, CountryRepository, CountryUpdate};
use crate::infrastructure::database::PatchQuery;
use crate::infrastructure::metrics::time_query;
use crate::shared::error::AppError;

/// PostgreSQL country repository implementation.
#[derive(Clone)]
pub struct PgCountryRepository {
    pool: PgPool,
}

impl PgCountryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CountryRepository for PgCountryRepository {
    async fn select(&self) -> Result<Vec<Country>, AppError> {
        let _timer = time_query("select", "countries");

        let rows = sqlx::query_as::<_, Country>(
            "SELECT id, name, created_at, updated_at FROM countries ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn create(&self, country: &Country) -> Result<String, AppError> {
        let _timer = time_query("create", "countries");

        let id = sqlx::query_scalar::<_, String>(
            "INSERT INTO countries (name) VALUES ($1) RETURNING id",
        )
        .bind(&country.name)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<Country, AppError> {
        let _timer = time_query("get", "countries");

        sqlx::query_as::<_, Country>(
            "SELECT id, name, created_at, updated_at FROM countries WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::not_found("Country", id))
    }

    async fn update(&self, id: &str, update: &CountryUpdate) -> Result<(), AppError> {
        let _timer = time_query("update", "countries");

        let mut patch = PatchQuery::new("countries");
        patch.set("name", update.name.as_deref());

        if !patch.execute(&self.pool, "id", id).await? {
            return Err(AppError::not_found("Country", id));
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let _timer = time_query("delete", "countries");

        let result = sqlx::query("DELETE FROM countries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "Country"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Country", id));
        }

        Ok(())
    }
}
