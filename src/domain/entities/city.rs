//! City entity and repository trait.
//!
//! Maps to the `cities` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::merge;
use crate::shared::error::AppError;

/// A city a store is located in.
///
/// Maps to the `cities` table:
/// - id: TEXT PRIMARY KEY DEFAULT gen_random_uuid()
/// - country_id: TEXT NOT NULL
/// - name: TEXT NULL
/// - geocenter: TEXT NULL
/// - created_at / updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct City {
    pub id: String,
    pub country_id: String,
    pub name: Option<String>,
    /// Coordinates of the city center ("lat,lng")
    pub geocenter: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl City {
    pub fn new(country_id: impl Into<String>, name: Option<String>, geocenter: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            country_id: country_id.into(),
            name,
            geocenter,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityUpdate {
    pub country_id: Option<String>,
    pub name: Option<String>,
    pub geocenter: Option<String>,
}

impl CityUpdate {
    pub fn is_empty(&self) -> bool {
        self.country_id.is_none() && self.name.is_none() && self.geocenter.is_none()
    }

    pub fn apply(&self, city: &mut City) {
        if let Some(country_id) = &self.country_id {
            city.country_id = country_id.clone();
        }
        merge(&mut city.name, &self.name);
        merge(&mut city.geocenter, &self.geocenter);
    }
}

/// Repository trait for City data access operations.
///
/// `get` reports a missing city as `Ok(None)`: a store may reference a city
/// that has not been registered yet.
#[async_trait]
pub trait CityRepository: Send + Sync {
    async fn select(&self) -> Result<Vec<City>, AppError>;

    async fn create(&self, city: &City) -> Result<String, AppError>;

    async fn get(&self, id: &str) -> Result<Option<City>, AppError>;

    async fn update(&self, id: &str, update: &CityUpdate) -> Result<(), AppError>;

    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
