//! Category entity and repository trait.
//!
//! Maps to the `categories` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::shared::error::AppError;

/// Represents a catalogue category.
///
/// Categories form a tree through `parent_id`; root categories have none.
///
/// Maps to the `categories` table:
/// - id: TEXT PRIMARY KEY DEFAULT gen_random_uuid()
/// - parent_id: TEXT NULL REFERENCES categories(id)
/// - name: TEXT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Category {
    /// Opaque identifier assigned by the repository
    pub id: String,

    /// Parent category, `None` for roots
    pub parent_id: Option<String>,

    pub name: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Build an unsaved category. The id is assigned on create.
    pub fn new(parent_id: Option<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            parent_id,
            name: Some(name.into()),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a category.
///
/// Re-parenting is not supported: only the name can change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryUpdate {
    pub name: Option<String>,
}

impl CategoryUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    /// Apply the present fields to `category`.
    pub fn apply(&self, category: &mut Category) {
        if let Some(name) = &self.name {
            category.name = Some(name.clone());
        }
    }
}

/// Repository trait for Category data access operations.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List every category as a flat list.
    async fn select(&self) -> Result<Vec<Category>, AppError>;

    /// List the direct children of a category.
    async fn select_by_parent_id(&self, parent_id: &str) -> Result<Vec<Category>, AppError>;

    /// Persist a new category and return its generated id.
    async fn create(&self, category: &Category) -> Result<String, AppError>;

    /// Find a category by id.
    async fn get(&self, id: &str) -> Result<Category, AppError>;

    /// Apply a partial update.
    async fn update(&self, id: &str, update: &CategoryUpdate) -> Result<(), AppError>;

    /// Delete a category.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
