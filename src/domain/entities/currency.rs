//! Currency entity and repository trait.
//!
//! A currency is a detail record of a country and is looked up by the
//! country id, not by its own key.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::merge;
use crate::shared::error::AppError;

/// Maps to the `currencies` table:
/// - id: TEXT PRIMARY KEY DEFAULT gen_random_uuid()
/// - country_id: TEXT NOT NULL UNIQUE
/// - sign: TEXT NULL
/// - decimals: TEXT NULL
/// - prefix: BOOLEAN NOT NULL DEFAULT FALSE
/// - created_at / updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Currency {
    pub id: String,
    pub country_id: String,
    /// Display sign, e.g. "₸" or "$"
    pub sign: Option<String>,
    pub decimals: Option<String>,
    /// Whether the sign is printed before the amount
    pub prefix: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Currency {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            country_id: String::new(),
            sign: None,
            decimals: None,
            prefix: false,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencyUpdate {
    pub sign: Option<String>,
    pub decimals: Option<String>,
    pub prefix: Option<bool>,
}

impl CurrencyUpdate {
    pub fn is_empty(&self) -> bool {
        self.sign.is_none() && self.decimals.is_none() && self.prefix.is_none()
    }

    pub fn apply(&self, currency: &mut Currency) {
        merge(&mut currency.sign, &self.sign);
        merge(&mut currency.decimals, &self.decimals);
        if let Some(prefix) = self.prefix {
            currency.prefix = prefix;
        }
    }
}

/// Repository trait for Currency data access operations.
#[async_trait]
pub trait CurrencyRepository: Send + Sync {
    async fn select(&self) -> Result<Vec<Currency>, AppError>;

    async fn create(&self, currency: &Currency) -> Result<String, AppError>;

    /// Find the currency of a country.
    async fn get(&self, country_id: &str) -> Result<Option<Currency>, AppError>;

    /// Patch the currency of a country.
    async fn update(&self, country_id: &str, update: &CurrencyUpdate) -> Result<(), AppError>;

    /// Delete by the currency's own id.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
