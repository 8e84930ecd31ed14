//! Schedule entity and repository trait.
//!
//! Opening hours of a store, stored 1:1 with the store and keyed by its id.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::merge;
use crate::shared::error::AppError;

/// A day and time window, e.g. `{ "day": "mon", "from": "09:00", "to": "21:00" }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Period {
    pub day: String,
    pub from: String,
    pub to: String,
}

/// Maps to the `schedules` table:
/// - id: TEXT PRIMARY KEY DEFAULT gen_random_uuid()
/// - store_id: TEXT NOT NULL UNIQUE REFERENCES stores(id) ON DELETE CASCADE
/// - periods: BYTEA NULL -- JSON-encoded `[Period]`
/// - is_active: BOOLEAN NOT NULL DEFAULT TRUE
/// - created_at / updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Schedule {
    pub id: String,
    pub store_id: String,
    pub periods: Option<Vec<u8>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Schedule {
    /// A new, active schedule for `store_id`.
    pub fn new(store_id: impl Into<String>, periods: Vec<u8>) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            store_id: store_id.into(),
            periods: Some(periods),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleUpdate {
    pub periods: Option<Vec<u8>>,
    pub is_active: Option<bool>,
}

impl ScheduleUpdate {
    pub fn is_empty(&self) -> bool {
        self.periods.is_none() && self.is_active.is_none()
    }

    pub fn apply(&self, schedule: &mut Schedule) {
        merge(&mut schedule.periods, &self.periods);
        if let Some(is_active) = self.is_active {
            schedule.is_active = is_active;
        }
    }
}

/// Repository trait for Schedule data access operations.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn create(&self, schedule: &Schedule) -> Result<String, AppError>;

    /// Find the schedule of a store. A store without one yields `None`.
    async fn get(&self, store_id: &str) -> Result<Option<Schedule>, AppError>;

    async fn update(&self, store_id: &str, update: &ScheduleUpdate) -> Result<(), AppError>;

    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
