//! Country entity and repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::shared::error::AppError;

/// Maps to the `countries` table (id, name, created_at, updated_at).
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Country {
    pub id: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Country {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            name: Some(name.into()),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryUpdate {
    pub name: Option<String>,
}

impl CountryUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    pub fn apply(&self, country: &mut Country) {
        if let Some(name) = &self.name {
            country.name = Some(name.clone());
        }
    }
}

#[async_trait]
pub trait CountryRepository: Send + Sync {
    async fn select(&self) -> Result<Vec<Country>, AppError>;

    async fn create(&self, country: &Country) -> Result<String, AppError>;

    async fn get(&self, id: &str) -> Result<Country, AppError>;

    async fn update(&self, id: &str, update: &CountryUpdate) -> Result<(), AppError>;

    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
