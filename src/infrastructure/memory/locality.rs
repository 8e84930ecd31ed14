use async_trait::async_trait;

use super::MemoryTable;
use crate::domain::{
    City, CityRepository, CityUpdate, Country, CountryRepository, CountryUpdate, Currency,
    CurrencyRepository, CurrencyUpdate,
};
use crate::shared::error::AppError;

#[derive(Default)]
pub struct MemoryCountryRepository {
    table: MemoryTable<Country>,
}

#[async_trait]
impl CountryRepository for MemoryCountryRepository {
    async fn select(&self) -> Result<Vec<Country>, AppError> {
        let mut countries = self.table.all();
        countries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(countries)
    }

    async fn create(&self, country: &Country) -> Result<String, AppError> {
        Ok(self.table.insert(country))
    }

    async fn get(&self, id: &str) -> Result<Country, AppError> {
        self.table
            .find_by_id(id)
            .ok_or_else(|| AppError::not_found("Country", id))
    }

    async fn update(&self, id: &str, update: &CountryUpdate) -> Result<(), AppError> {
        if !self.table.patch(|c| c.id == id, update) {
            return Err(AppError::not_found("Country", id));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.table.remove(id) {
            return Err(AppError::not_found("Country", id));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryCityRepository {
    table: MemoryTable<City>,
}

#[async_trait]
impl CityRepository for MemoryCityRepository {
    async fn select(&self) -> Result<Vec<City>, AppError> {
        let mut cities = self.table.all();
        cities.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(cities)
    }

    async fn create(&self, city: &City) -> Result<String, AppError> {
        Ok(self.table.insert(city))
    }

    async fn get(&self, id: &str) -> Result<Option<City>, AppError> {
        Ok(self.table.find_by_id(id))
    }

    async fn update(&self, id: &str, update: &CityUpdate) -> Result<(), AppError> {
        if !self.table.patch(|c| c.id == id, update) {
            return Err(AppError::not_found("City", id));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.table.remove(id) {
            return Err(AppError::not_found("City", id));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryCurrencyRepository {
    table: MemoryTable<Currency>,
}

#[async_trait]
impl CurrencyRepository for MemoryCurrencyRepository {
    async fn select(&self) -> Result<Vec<Currency>, AppError> {
        Ok(self.table.all())
    }

    async fn create(&self, currency: &Currency) -> Result<String, AppError> {
        self.table
            .insert_unless(currency, |c| c.country_id == currency.country_id)
            .ok_or_else(|| AppError::BadRequest("Currency already exists".to_string()))
    }

    async fn get(&self, country_id: &str) -> Result<Option<Currency>, AppError> {
        Ok(self.table.find(|c| c.country_id == country_id))
    }

    async fn update(&self, country_id: &str, update: &CurrencyUpdate) -> Result<(), AppError> {
        if !self.table.patch(|c| c.country_id == country_id, update) {
            return Err(AppError::not_found("Currency of country", country_id));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.table.remove(id) {
            return Err(AppError::not_found("Currency", id));
        }
        Ok(())
    }
}
