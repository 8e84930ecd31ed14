//! Inventory entity and repository trait.
//!
//! Stock and pricing of one product in one store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::merge;
use crate::shared::error::AppError;

/// Maps to the `inventories` table:
/// - id: TEXT PRIMARY KEY DEFAULT gen_random_uuid()
/// - store_id: TEXT NOT NULL REFERENCES stores(id) ON DELETE CASCADE
/// - product_id: TEXT NOT NULL REFERENCES products(id) ON DELETE CASCADE
/// - quantity, quantity_min, quantity_max: INTEGER NULL
/// - price, price_special, price_previous: NUMERIC NULL
/// - is_available: BOOLEAN NULL
/// - created_at / updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Inventory {
    pub id: String,
    pub store_id: String,
    pub product_id: String,
    pub quantity: Option<i32>,
    /// Restock threshold
    pub quantity_min: Option<i32>,
    pub quantity_max: Option<i32>,
    pub price: Option<Decimal>,
    /// Promotional price, shown instead of `price` when set
    pub price_special: Option<Decimal>,
    pub price_previous: Option<Decimal>,
    pub is_available: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Inventory {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            store_id: String::new(),
            product_id: String::new(),
            quantity: None,
            quantity_min: None,
            quantity_max: None,
            price: None,
            price_special: None,
            price_previous: None,
            is_available: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryUpdate {
    pub quantity: Option<i32>,
    pub quantity_min: Option<i32>,
    pub quantity_max: Option<i32>,
    pub price: Option<Decimal>,
    pub price_special: Option<Decimal>,
    pub price_previous: Option<Decimal>,
    pub is_available: Option<bool>,
}

impl InventoryUpdate {
    pub fn is_empty(&self) -> bool {
        self.quantity.is_none()
            && self.quantity_min.is_none()
            && self.quantity_max.is_none()
            && self.price.is_none()
            && self.price_special.is_none()
            && self.price_previous.is_none()
            && self.is_available.is_none()
    }

    pub fn apply(&self, inventory: &mut Inventory) {
        merge(&mut inventory.quantity, &self.quantity);
        merge(&mut inventory.quantity_min, &self.quantity_min);
        merge(&mut inventory.quantity_max, &self.quantity_max);
        merge(&mut inventory.price, &self.price);
        merge(&mut inventory.price_special, &self.price_special);
        merge(&mut inventory.price_previous, &self.price_previous);
        merge(&mut inventory.is_available, &self.is_available);
    }
}

/// Repository trait for Inventory data access operations.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    async fn select(&self) -> Result<Vec<Inventory>, AppError>;

    async fn create(&self, inventory: &Inventory) -> Result<String, AppError>;

    async fn get(&self, id: &str) -> Result<Inventory, AppError>;

    async fn update(&self, id: &str, update: &InventoryUpdate) -> Result<(), AppError>;

    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
