use super::WarehouseService;
use crate::application::dto::{
    CityRequest, CityResponse, CountryRequest, CountryResponse, CurrencyRequest,
    CurrencyResponse, UpdateCityRequest, UpdateCurrencyRequest,
};
use crate::domain::{City, CityUpdate, Currency, CurrencyUpdate};
use crate::shared::error::AppError;

impl WarehouseService {
    // ========================================================================
    // Countries
    // ========================================================================

    pub async fn list_countries(&self) -> Result<Vec<CountryResponse>, AppError> {
        let countries = self.countries.select().await?;
        Ok(countries.into_iter().map(CountryResponse::from).collect())
    }

    pub async fn add_country(&self, request: CountryRequest) -> Result<CountryResponse, AppError> {
        let mut country = request.into_entity();
        country.id = self.countries.create(&country).await?;

        tracing::info!(country_id = %country.id, "Country created");
        Ok(country.into())
    }

    pub async fn get_country(&self, id: &str) -> Result<CountryResponse, AppError> {
        let country = self.countries.get(id).await?;
        Ok(country.into())
    }

    pub async fn update_country(&self, id: &str, request: CountryRequest) -> Result<(), AppError> {
        self.countries.update(id, &request.into_update()).await
    }

    pub async fn delete_country(&self, id: &str) -> Result<(), AppError> {
        self.countries.delete(id).await?;
        tracing::info!(country_id = %id, "Country deleted");
        Ok(())
    }

    // ========================================================================
    // Cities
    // ========================================================================

    pub async fn list_cities(&self) -> Result<Vec<CityResponse>, AppError> {
        let cities = self.cities.select().await?;
        Ok(cities.into_iter().map(CityResponse::from).collect())
    }

    pub async fn add_city(&self, request: CityRequest) -> Result<CityResponse, AppError> {
        let mut city = City::from(request);
        city.id = self.cities.create(&city).await?;

        tracing::info!(city_id = %city.id, country_id = %city.country_id, "City created");
        Ok(city.into())
    }

    pub async fn get_city(&self, id: &str) -> Result<CityResponse, AppError> {
        self.cities
            .get(id)
            .await?
            .map(CityResponse::from)
            .ok_or_else(|| AppError::not_found("City", id))
    }

    pub async fn update_city(&self, id: &str, request: UpdateCityRequest) -> Result<(), AppError> {
        self.cities.update(id, &CityUpdate::from(request)).await
    }

    pub async fn delete_city(&self, id: &str) -> Result<(), AppError> {
        self.cities.delete(id).await?;
        tracing::info!(city_id = %id, "City deleted");
        Ok(())
    }

    // ========================================================================
    // Currencies (keyed by country)
    // ========================================================================

    pub async fn list_currencies(&self) -> Result<Vec<CurrencyResponse>, AppError> {
        let currencies = self.currencies.select().await?;
        Ok(currencies.into_iter().map(CurrencyResponse::from).collect())
    }

    pub async fn add_currency(&self, request: CurrencyRequest) -> Result<CurrencyResponse, AppError> {
        let mut currency = Currency::from(request);
        currency.id = self.currencies.create(&currency).await?;

        tracing::info!(currency_id = %currency.id, country_id = %currency.country_id, "Currency created");
        Ok(currency.into())
    }

    /// The currency of a country.
    pub async fn get_currency(&self, country_id: &str) -> Result<CurrencyResponse, AppError> {
        self.currencies
            .get(country_id)
            .await?
            .map(CurrencyResponse::from)
            .ok_or_else(|| AppError::not_found("Currency of country", country_id))
    }

    pub async fn update_currency(
        &self,
        country_id: &str,
        request: UpdateCurrencyRequest,
    ) -> Result<(), AppError> {
        self.currencies
            .update(country_id, &CurrencyUpdate::from(request))
            .await
    }

    /// Delete a currency by its own id.
    pub async fn delete_currency(&self, id: &str) -> Result<(), AppError> {
        self.currencies.delete(id).await?;
        tracing::info!(currency_id = %id, "Currency deleted");
        Ok(())
    }
}
