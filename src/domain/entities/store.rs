//! Store entity and repository trait.
//!
//! Maps to the `stores` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::merge;
use crate::shared::error::AppError;

/// Represents a physical store of a merchant.
///
/// A store belongs to a city; its schedule and delivery settings live in
/// separate 1:1 detail rows keyed by the store id.
///
/// Maps to the `stores` table:
/// - id: TEXT PRIMARY KEY DEFAULT gen_random_uuid()
/// - merchant_id: TEXT NOT NULL
/// - city_id: TEXT NOT NULL
/// - name, address, location: TEXT NULL
/// - rating: NUMERIC NULL
/// - is_active: BOOLEAN NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Store {
    pub id: String,
    pub merchant_id: String,
    pub city_id: String,
    pub name: Option<String>,
    pub address: Option<String>,
    /// Free-form coordinates string ("lat,lng")
    pub location: Option<String>,
    pub rating: Option<Decimal>,
    pub is_active: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Store {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            merchant_id: String::new(),
            city_id: String::new(),
            name: None,
            address: None,
            location: None,
            rating: None,
            is_active: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreUpdate {
    pub city_id: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub location: Option<String>,
    pub rating: Option<Decimal>,
    pub is_active: Option<bool>,
}

impl StoreUpdate {
    pub fn is_empty(&self) -> bool {
        self.city_id.is_none()
            && self.name.is_none()
            && self.address.is_none()
            && self.location.is_none()
            && self.rating.is_none()
            && self.is_active.is_none()
    }

    pub fn apply(&self, store: &mut Store) {
        if let Some(city_id) = &self.city_id {
            store.city_id = city_id.clone();
        }
        merge(&mut store.name, &self.name);
        merge(&mut store.address, &self.address);
        merge(&mut store.location, &self.location);
        merge(&mut store.rating, &self.rating);
        merge(&mut store.is_active, &self.is_active);
    }
}

/// Repository trait for Store data access operations.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn select(&self) -> Result<Vec<Store>, AppError>;

    async fn create(&self, store: &Store) -> Result<String, AppError>;

    async fn get(&self, id: &str) -> Result<Store, AppError>;

    async fn update(&self, id: &str, update: &StoreUpdate) -> Result<(), AppError>;

    /// Hard delete. Detail rows are removed by the database cascade.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
