//! Product Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{ProductRequest, ProductResponse, UpdateProductRequest};
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.catalogue.list_products().await?;
    Ok(Json(products))
}

pub async fn add_product(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<ProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let product = state.catalogue.add_product(body).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.catalogue.get_product(&id).await?;
    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateProductRequest>,
) -> Result<StatusCode, AppError> {
    state.catalogue.update_product(&id, body).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.catalogue.delete_product(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
