//! Category Repository Implementation
//!
//! PostgreSQL implementation of the CategoryRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;

use super::map_write_error;
use crate::domain::{Category, CategoryRepository, CategoryUpdate};
use crate::infrastructure::database::PatchQuery;
use crate::infrastructure::metrics::time_query;
use crate::shared::error::AppError;

/// PostgreSQL category repository implementation.
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    /// Create a new PgCategoryRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn select(&self) -> Result<Vec<Category>, AppError> {
        let _timer = time_query("select", "categories");

        let rows = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, parent_id, name, created_at, updated_at
            FROM categories
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Direct children only; the tree is not walked recursively.
    async fn select_by_parent_id(&self, parent_id: &str) -> Result<Vec<Category>, AppError> {
        let _timer = time_query("select_by_parent_id", "categories");

        let rows = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, parent_id, name, created_at, updated_at
            FROM categories
            WHERE parent_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn create(&self, category: &Category) -> Result<String, AppError> {
        let _timer = time_query("create", "categories");

        let id = sqlx::query_scalar::<_, String>(
            r#"
            INSERT INTO categories (parent_id, name)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&category.parent_id)
        .bind(&category.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Category"))?;

        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<Category, AppError> {
        let _timer = time_query("get", "categories");

        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, parent_id, name, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::not_found("Category", id))
    }

    async fn update(&self, id: &str, update: &CategoryUpdate) -> Result<(), AppError> {
        let _timer = time_query("update", "categories");

        let mut patch = PatchQuery::new("categories");
        patch.set("name", update.name.as_deref());

        if !patch.execute(&self.pool, "id", id).await? {
            return Err(AppError::not_found("Category", id));
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let _timer = time_query("delete", "categories");

        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "Category"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Category", id));
        }

        Ok(())
    }
}
