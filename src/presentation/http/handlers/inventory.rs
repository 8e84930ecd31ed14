//! Inventory Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{InventoryRequest, InventoryResponse, UpdateInventoryRequest};
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

pub async fn list_inventories(
    State(state): State<AppState>,
) -> Result<Json<Vec<InventoryResponse>>, AppError> {
    let inventories = state.warehouse.list_inventories().await?;
    Ok(Json(inventories))
}

pub async fn add_inventory(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<InventoryRequest>,
) -> Result<(StatusCode, Json<InventoryResponse>), AppError> {
    let inventory = state.warehouse.add_inventory(body).await?;
    Ok((StatusCode::CREATED, Json(inventory)))
}

pub async fn get_inventory(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InventoryResponse>, AppError> {
    let inventory = state.warehouse.get_inventory(&id).await?;
    Ok(Json(inventory))
}

pub async fn update_inventory(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateInventoryRequest>,
) -> Result<StatusCode, AppError> {
    state.warehouse.update_inventory(&id, body).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_inventory(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.warehouse.delete_inventory(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
