//! City Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;

use super::map_write_error;
use crate::domain::{City, CityRepository, CityUpdate};
use crate::infrastructure::database::PatchQuery;
use crate::infrastructure::metrics::time_query;
use crate::shared::error::AppError;

/// PostgreSQL city repository implementation.
#[derive(Clone)]
pub struct PgCityRepository {
    pool: PgPool,
}

impl PgCityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CityRepository for PgCityRepository {
    async fn select(&self) -> Result<Vec<City>, AppError> {
        let _timer = time_query("select", "cities");

        let rows = sqlx::query_as::<_, City>(
            r#"
            SELECT id, country_id, name, geocenter, created_at, updated_at
            FROM cities
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn create(&self, city: &City) -> Result<String, AppError> {
        let _timer = time_query("create", "cities");

        let id = sqlx::query_scalar::<_, String>(
            "INSERT INTO cities (country_id, name, geocenter) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&city.country_id)
        .bind(&city.name)
        .bind(&city.geocenter)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "City"))?;

        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<Option<City>, AppError> {
        let _timer = time_query("get", "cities");

        let city = sqlx::query_as::<_, City>(
            r#"
            SELECT id, country_id, name, geocenter, created_at, updated_at
            FROM cities
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(city)
    }

    async fn update(&self, id: &str, update: &CityUpdate) -> Result<(), AppError> {
        let _timer = time_query("update", "cities");

        let mut patch = PatchQuery::new("cities");
        patch
            .set("country_id", update.country_id.as_deref())
            .set("name", update.name.as_deref())
            .set("geocenter", update.geocenter.as_deref());

        let found = patch
            .execute(&self.pool, "id", id)
            .await
            .map_err(|e| map_write_error(e, "City"))?;
        if !found {
            return Err(AppError::not_found("City", id));
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let _timer = time_query("delete", "cities");

        let result = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "City"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("City", id));
        }

        Ok(())
    }
}
