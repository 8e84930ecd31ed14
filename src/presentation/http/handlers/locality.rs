//! Country, City and Currency Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{
    CityRequest, CityResponse, CountryRequest, CountryResponse, CurrencyRequest,
    CurrencyResponse, UpdateCityRequest, UpdateCurrencyRequest,
};
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

// ============================================================================
// Countries
// ============================================================================

pub async fn list_countries(
    State(state): State<AppState>,
) -> Result<Json<Vec<CountryResponse>>, AppError> {
    Ok(Json(state.warehouse.list_countries().await?))
}

pub async fn add_country(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CountryRequest>,
) -> Result<(StatusCode, Json<CountryResponse>), AppError> {
    let country = state.warehouse.add_country(body).await?;
    Ok((StatusCode::CREATED, Json(country)))
}

pub async fn get_country(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CountryResponse>, AppError> {
    Ok(Json(state.warehouse.get_country(&id).await?))
}

pub async fn update_country(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<CountryRequest>,
) -> Result<StatusCode, AppError> {
    state.warehouse.update_country(&id, body).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_country(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.warehouse.delete_country(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Cities
// ============================================================================

pub async fn list_cities(
    State(state): State<AppState>,
) -> Result<Json<Vec<CityResponse>>, AppError> {
    Ok(Json(state.warehouse.list_cities().await?))
}

pub async fn add_city(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CityRequest>,
) -> Result<(StatusCode, Json<CityResponse>), AppError> {
    let city = state.warehouse.add_city(body).await?;
    Ok((StatusCode::CREATED, Json(city)))
}

pub async fn get_city(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CityResponse>, AppError> {
    Ok(Json(state.warehouse.get_city(&id).await?))
}

pub async fn update_city(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateCityRequest>,
) -> Result<StatusCode, AppError> {
    state.warehouse.update_city(&id, body).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_city(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.warehouse.delete_city(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Currencies
// ============================================================================

pub async fn list_currencies(
    State(state): State<AppState>,
) -> Result<Json<Vec<CurrencyResponse>>, AppError> {
    Ok(Json(state.warehouse.list_currencies().await?))
}

pub async fn add_currency(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CurrencyRequest>,
) -> Result<(StatusCode, Json<CurrencyResponse>), AppError> {
    let currency = state.warehouse.add_currency(body).await?;
    Ok((StatusCode::CREATED, Json(currency)))
}

/// Get the currency of a country
pub async fn get_currency(
    State(state): State<AppState>,
    Path(country_id): Path<String>,
) -> Result<Json<CurrencyResponse>, AppError> {
    Ok(Json(state.warehouse.get_currency(&country_id).await?))
}

/// Update the currency of a country
pub async fn update_currency(
    State(state): State<AppState>,
    Path(country_id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateCurrencyRequest>,
) -> Result<StatusCode, AppError> {
    state.warehouse.update_currency(&country_id, body).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a currency by its own id
pub async fn delete_currency(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.warehouse.delete_currency(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
