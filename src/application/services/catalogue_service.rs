//! Catalogue Service
//!
//! Handles the category tree and catalogue products.

use std::sync::Arc;

use crate::application::dto::{
    CategoryRequest, CategoryResponse, ProductRequest, ProductResponse, UpdateProductRequest,
};
use crate::domain::{CategoryRepository, Product, ProductRepository, ProductUpdate};
use crate::infrastructure::Repositories;
use crate::shared::error::AppError;

/// Categories and products.
#[derive(Clone)]
pub struct CatalogueService {
    categories: Arc<dyn CategoryRepository>,
    products: Arc<dyn ProductRepository>,
}

impl CatalogueService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            categories: repositories.categories.clone(),
            products: repositories.products.clone(),
        }
    }

    // ========================================================================
    // Categories
    // ========================================================================

    /// All categories, flat.
    pub async fn list_categories(&self) -> Result<Vec<CategoryResponse>, AppError> {
        let categories = self.categories.select().await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    pub async fn add_category(&self, request: CategoryRequest) -> Result<CategoryResponse, AppError> {
        let mut category = request.into_entity();
        category.id = self.categories.create(&category).await?;

        tracing::info!(category_id = %category.id, parent_id = ?category.parent_id, "Category created");
        Ok(category.into())
    }

    /// A category with its direct children. Grandchildren are not loaded.
    pub async fn get_category(&self, id: &str) -> Result<CategoryResponse, AppError> {
        let category = self.categories.get(id).await?;
        let children = self.categories.select_by_parent_id(id).await?;

        let mut response = CategoryResponse::from(category);
        response.children = children.into_iter().map(CategoryResponse::from).collect();
        Ok(response)
    }

    /// Rename a category. The parent is fixed at creation.
    pub async fn update_category(&self, id: &str, request: CategoryRequest) -> Result<(), AppError> {
        self.categories.update(id, &request.into_update()).await
    }

    pub async fn delete_category(&self, id: &str) -> Result<(), AppError> {
        self.categories.delete(id).await?;
        tracing::info!(category_id = %id, "Category deleted");
        Ok(())
    }

    // ========================================================================
    // Products
    // ========================================================================

    pub async fn list_products(&self) -> Result<Vec<ProductResponse>, AppError> {
        let products = self.products.select().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    pub async fn add_product(&self, request: ProductRequest) -> Result<ProductResponse, AppError> {
        let mut product = Product::from(request);
        product.id = self.products.create(&product).await?;

        tracing::info!(product_id = %product.id, category_id = %product.category_id, "Product created");
        Ok(product.into())
    }

    pub async fn get_product(&self, id: &str) -> Result<ProductResponse, AppError> {
        let product = self.products.get(id).await?;
        Ok(product.into())
    }

    pub async fn update_product(&self, id: &str, request: UpdateProductRequest) -> Result<(), AppError> {
        self.products.update(id, &ProductUpdate::from(request)).await
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), AppError> {
        self.products.delete(id).await?;
        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }
}
