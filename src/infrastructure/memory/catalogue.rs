use async_trait::async_trait;

use super::MemoryTable;
use crate::domain::{
    Category, CategoryRepository, CategoryUpdate, Product, ProductRepository, ProductUpdate,
};
use crate::shared::error::AppError;

#[derive(Default)]
pub struct MemoryCategoryRepository {
    table: MemoryTable<Category>,
}

#[async_trait]
impl CategoryRepository for MemoryCategoryRepository {
    async fn select(&self) -> Result<Vec<Category>, AppError> {
        Ok(self.table.all())
    }

    async fn select_by_parent_id(&self, parent_id: &str) -> Result<Vec<Category>, AppError> {
        Ok(self
            .table
            .filter(|c| c.parent_id.as_deref() == Some(parent_id)))
    }

    async fn create(&self, category: &Category) -> Result<String, AppError> {
        Ok(self.table.insert(category))
    }

    async fn get(&self, id: &str) -> Result<Category, AppError> {
        self.table
            .find_by_id(id)
            .ok_or_else(|| AppError::not_found("Category", id))
    }

    async fn update(&self, id: &str, update: &CategoryUpdate) -> Result<(), AppError> {
        if !self.table.patch(|c| c.id == id, update) {
            return Err(AppError::not_found("Category", id));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.table.remove(id) {
            return Err(AppError::not_found("Category", id));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryProductRepository {
    table: MemoryTable<Product>,
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn select(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.table.all())
    }

    async fn create(&self, product: &Product) -> Result<String, AppError> {
        Ok(self.table.insert(product))
    }

    async fn get(&self, id: &str) -> Result<Product, AppError> {
        self.table
            .find_by_id(id)
            .ok_or_else(|| AppError::not_found("Product", id))
    }

    async fn update(&self, id: &str, update: &ProductUpdate) -> Result<(), AppError> {
        if !self.table.patch(|p| p.id == id, update) {
            return Err(AppError::not_found("Product", id));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.table.remove(id) {
            return Err(AppError::not_found("Product", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_select_by_parent_id_filters_direct_children() {
        let repo = MemoryCategoryRepository::default();
        let dairy = repo.create(&Category::new(None, "Dairy")).await.unwrap();
        let milk = repo
            .create(&Category::new(Some(dairy.clone()), "Milk"))
            .await
            .unwrap();
        repo.create(&Category::new(Some(milk.clone()), "Skimmed"))
            .await
            .unwrap();
        repo.create(&Category::new(None, "Bakery")).await.unwrap();

        let children = repo.select_by_parent_id(&dairy).await.unwrap();
        let names: Vec<_> = children.iter().filter_map(|c| c.name.as_deref()).collect();

        assert_eq!(names, vec!["Milk"]);
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let repo = MemoryProductRepository::default();

        assert!(repo.get("nope").await.unwrap_err().is_not_found());
        assert!(repo.delete("nope").await.unwrap_err().is_not_found());
        assert!(repo
            .update("nope", &ProductUpdate::default())
            .await
            .unwrap_err()
            .is_not_found());
    }
}
