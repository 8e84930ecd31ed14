//! Product Repository Implementation
//!
//! PostgreSQL implementation of the ProductRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;

use super::map_write_error;
use crate::domain::{Product, ProductRepository, ProductUpdate};
use crate::infrastructure::database::PatchQuery;
use crate::infrastructure::metrics::time_query;
use crate::shared::error::AppError;

/// PostgreSQL product repository implementation.
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn select(&self) -> Result<Vec<Product>, AppError> {
        let _timer = time_query("select", "products");

        let rows = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, category_id, name, description, measure, image_url, country, barcode, brand,
                   created_at, updated_at
            FROM products
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn create(&self, product: &Product) -> Result<String, AppError> {
        let _timer = time_query("create", "products");

        let id = sqlx::query_scalar::<_, String>(
            r#"
            INSERT INTO products (category_id, name, description, measure, image_url, country, barcode, brand)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&product.category_id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.measure)
        .bind(&product.image_url)
        .bind(&product.country)
        .bind(&product.barcode)
        .bind(&product.brand)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Product"))?;

        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<Product, AppError> {
        let _timer = time_query("get", "products");

        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, category_id, name, description, measure, image_url, country, barcode, brand,
                   created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::not_found("Product", id))
    }

    async fn update(&self, id: &str, update: &ProductUpdate) -> Result<(), AppError> {
        let _timer = time_query("update", "products");

        let mut patch = PatchQuery::new("products");
        patch
            .set("category_id", update.category_id.as_deref())
            .set("name", update.name.as_deref())
            .set("description", update.description.as_deref())
            .set("measure", update.measure.as_deref())
            .set("image_url", update.image_url.as_deref())
            .set("country", update.country.as_deref())
            .set("barcode", update.barcode.as_deref())
            .set("brand", update.brand.as_deref());

        let found = patch
            .execute(&self.pool, "id", id)
            .await
            .map_err(|e| map_write_error(e, "Product"))?;
        if !found {
            return Err(AppError::not_found("Product", id));
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let _timer = time_query("delete", "products");

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Product", id));
        }

        Ok(())
    }
}
