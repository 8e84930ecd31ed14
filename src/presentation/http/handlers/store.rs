//! Store Handlers
//!
//! Reads return the store aggregate (city, country, currency, schedule,
//! delivery); updates may carry nested `city`, `schedule` and `delivery`
//! sections.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{StoreRequest, StoreResponse, UpdateStoreRequest};
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List all stores with their details
pub async fn list_stores(
    State(state): State<AppState>,
) -> Result<Json<Vec<StoreResponse>>, AppError> {
    let stores = state.warehouse.list_stores().await?;
    Ok(Json(stores))
}

/// Create a store
pub async fn add_store(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<StoreRequest>,
) -> Result<(StatusCode, Json<StoreResponse>), AppError> {
    let store = state.warehouse.add_store(body).await?;
    Ok((StatusCode::CREATED, Json(store)))
}

/// Get a store with its details
pub async fn get_store(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StoreResponse>, AppError> {
    let store = state.warehouse.get_store(&id).await?;
    Ok(Json(store))
}

/// Update a store and the detail sections supplied
pub async fn update_store(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateStoreRequest>,
) -> Result<StatusCode, AppError> {
    state.warehouse.update_store(&id, body).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a store
pub async fn delete_store(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.warehouse.delete_store(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
