//! Category Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{CategoryRequest, CategoryResponse};
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List all categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, AppError> {
    let categories = state.catalogue.list_categories().await?;
    Ok(Json(categories))
}

/// Create a category
pub async fn add_category(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), AppError> {
    let category = state.catalogue.add_category(body).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Get a category with its direct children
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CategoryResponse>, AppError> {
    let category = state.catalogue.get_category(&id).await?;
    Ok(Json(category))
}

/// Rename a category
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<CategoryRequest>,
) -> Result<StatusCode, AppError> {
    state.catalogue.update_category(&id, body).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a category
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.catalogue.delete_category(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
