//! Delivery entity and repository trait.
//!
//! Delivery settings of a store: when it delivers and to which areas.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::merge;
use crate::shared::error::AppError;

/// A delivery zone vertex.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Area {
    pub latitude: String,
    pub longitude: String,
}

/// Maps to the `deliveries` table:
/// - id: TEXT PRIMARY KEY DEFAULT gen_random_uuid()
/// - store_id: TEXT NOT NULL UNIQUE REFERENCES stores(id) ON DELETE CASCADE
/// - periods: BYTEA NULL -- JSON-encoded `[Period]`
/// - areas: BYTEA NULL -- JSON-encoded `[Area]`
/// - is_active: BOOLEAN NOT NULL DEFAULT TRUE
/// - created_at / updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Delivery {
    pub id: String,
    pub store_id: String,
    pub periods: Option<Vec<u8>>,
    pub areas: Option<Vec<u8>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Delivery {
    pub fn new(store_id: impl Into<String>, periods: Vec<u8>, areas: Vec<u8>) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            store_id: store_id.into(),
            periods: Some(periods),
            areas: Some(areas),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryUpdate {
    pub periods: Option<Vec<u8>>,
    pub areas: Option<Vec<u8>>,
    pub is_active: Option<bool>,
}

impl DeliveryUpdate {
    pub fn is_empty(&self) -> bool {
        self.periods.is_none() && self.areas.is_none() && self.is_active.is_none()
    }

    pub fn apply(&self, delivery: &mut Delivery) {
        merge(&mut delivery.periods, &self.periods);
        merge(&mut delivery.areas, &self.areas);
        if let Some(is_active) = self.is_active {
            delivery.is_active = is_active;
        }
    }
}

/// Repository trait for Delivery data access operations.
#[async_trait]
pub trait DeliveryRepository: Send + Sync {
    async fn create(&self, delivery: &Delivery) -> Result<String, AppError>;

    /// Find the delivery settings of a store. A store without them yields `None`.
    async fn get(&self, store_id: &str) -> Result<Option<Delivery>, AppError>;

    async fn update(&self, store_id: &str, update: &DeliveryUpdate) -> Result<(), AppError>;

    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
