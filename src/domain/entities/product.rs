//! Product entity and repository trait.
//!
//! Maps to the `products` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::merge;
use crate::shared::error::AppError;

/// Represents a catalogue product.
///
/// Maps to the `products` table:
/// - id: TEXT PRIMARY KEY DEFAULT gen_random_uuid()
/// - category_id: TEXT NOT NULL REFERENCES categories(id)
/// - name, description, measure, image_url, country, barcode, brand: TEXT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Product {
    pub id: String,
    pub category_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Unit of measure (kg, pcs, l, ...)
    pub measure: Option<String>,
    pub image_url: Option<String>,
    /// Country of origin
    pub country: Option<String>,
    pub barcode: Option<String>,
    pub brand: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Product {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            category_id: String::new(),
            name: None,
            description: None,
            measure: None,
            image_url: None,
            country: None,
            barcode: None,
            brand: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub category_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub measure: Option<String>,
    pub image_url: Option<String>,
    pub country: Option<String>,
    pub barcode: Option<String>,
    pub brand: Option<String>,
}

impl ProductUpdate {
    pub fn is_empty(&self) -> bool {
        self.category_id.is_none()
            && self.name.is_none()
            && self.description.is_none()
            && self.measure.is_none()
            && self.image_url.is_none()
            && self.country.is_none()
            && self.barcode.is_none()
            && self.brand.is_none()
    }

    pub fn apply(&self, product: &mut Product) {
        if let Some(category_id) = &self.category_id {
            product.category_id = category_id.clone();
        }
        merge(&mut product.name, &self.name);
        merge(&mut product.description, &self.description);
        merge(&mut product.measure, &self.measure);
        merge(&mut product.image_url, &self.image_url);
        merge(&mut product.country, &self.country);
        merge(&mut product.barcode, &self.barcode);
        merge(&mut product.brand, &self.brand);
    }
}

/// Repository trait for Product data access operations.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn select(&self) -> Result<Vec<Product>, AppError>;

    async fn create(&self, product: &Product) -> Result<String, AppError>;

    async fn get(&self, id: &str) -> Result<Product, AppError>;

    async fn update(&self, id: &str, update: &ProductUpdate) -> Result<(), AppError>;

    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
