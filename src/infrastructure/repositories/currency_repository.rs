//! Currency Repository Implementation
//!
//! A currency belongs to exactly one country; reads and updates are keyed
//! by `country_id`, deletes by the currency's own id.

use async_trait::async_trait;
use sqlx::PgPool;

use super::map_write_error;
use crate::domain::{Currency, CurrencyRepository, CurrencyUpdate};
use crate::infrastructure::database::PatchQuery;
use crate::infrastructure::metrics::time_query;
use crate::shared::error::AppError;

/// PostgreSQL currency repository implementation.
#[derive(Clone)]
pub struct PgCurrencyRepository {
    pool: PgPool,
}

impl PgCurrencyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CurrencyRepository for PgCurrencyRepository {
    async fn select(&self) -> Result<Vec<Currency>, AppError> {
        let _timer = time_query("select", "currencies");

        let rows = sqlx::query_as::<_, Currency>(
            r#"
            SELECT id, country_id, sign, decimals, prefix, created_at, updated_at
            FROM currencies
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn create(&self, currency: &Currency) -> Result<String, AppError> {
        let _timer = time_query("create", "currencies");

        let id = sqlx::query_scalar::<_, String>(
            r#"
            INSERT INTO currencies (country_id, sign, decimals, prefix)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&currency.country_id)
        .bind(&currency.sign)
        .bind(&currency.decimals)
        .bind(currency.prefix)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Currency"))?;

        Ok(id)
    }

    async fn get(&self, country_id: &str) -> Result<Option<Currency>, AppError> {
        let _timer = time_query("get", "currencies");

        let currency = sqlx::query_as::<_, Currency>(
            r#"
            SELECT id, country_id, sign, decimals, prefix, created_at, updated_at
            FROM currencies
            WHERE country_id = $1
            "#,
        )
        .bind(country_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(currency)
    }

    async fn update(&self, country_id: &str, update: &CurrencyUpdate) -> Result<(), AppError> {
        let _timer = time_query("update", "currencies");

        let mut patch = PatchQuery::new("currencies");
        patch
            .set("sign", update.sign.as_deref())
            .set("decimals", update.decimals.as_deref())
            .set("prefix", update.prefix);

        if !patch.execute(&self.pool, "country_id", country_id).await? {
            return Err(AppError::not_found("Currency of country", country_id));
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let _timer = time_query("delete", "currencies");

        let result = sqlx::query("DELETE FROM currencies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Currency", id));
        }

        Ok(())
    }
}
