//! Catalogue Service Tests

use pretty_assertions::assert_eq;

use warehouse_service::application::dto::{CategoryRequest, ProductRequest, UpdateProductRequest};

use crate::common::services;

fn category(parent_id: Option<&str>, name: &str) -> CategoryRequest {
    CategoryRequest {
        parent_id: parent_id.map(str::to_string),
        name: name.into(),
    }
}

fn milk(category_id: &str) -> ProductRequest {
    ProductRequest {
        category_id: category_id.into(),
        name: "Milk 3.2%".into(),
        measure: "l".into(),
        barcode: "4870000000017".into(),
        brand: Some("Lactel".into()),
        ..ProductRequest::default()
    }
}

#[tokio::test]
async fn test_category_tree_shows_direct_children_only() {
    let (catalogue, _) = services();
    let dairy = catalogue.add_category(category(None, "Dairy")).await.unwrap();
    let milk = catalogue
        .add_category(category(Some(&dairy.id), "Milk"))
        .await
        .unwrap();
    catalogue
        .add_category(category(Some(&milk.id), "Skimmed"))
        .await
        .unwrap();

    let tree = catalogue.get_category(&dairy.id).await.unwrap();

    assert_eq!(tree.name, "Dairy");
    assert_eq!(tree.parent_id, None);
    assert_eq!(tree.children.len(), 1);
    assert_eq!(tree.children[0].name, "Milk");
    assert_eq!(tree.children[0].parent_id.as_deref(), Some(dairy.id.as_str()));
    assert!(tree.children[0].children.is_empty());
}

#[tokio::test]
async fn test_rename_keeps_parent() {
    let (catalogue, _) = services();
    let dairy = catalogue.add_category(category(None, "Dairy")).await.unwrap();
    let milk = catalogue
        .add_category(category(Some(&dairy.id), "Milk"))
        .await
        .unwrap();

    catalogue
        .update_category(&milk.id, category(None, "Milk & Cream"))
        .await
        .unwrap();

    let renamed = catalogue.get_category(&milk.id).await.unwrap();
    assert_eq!(renamed.name, "Milk & Cream");
    assert_eq!(renamed.parent_id.as_deref(), Some(dairy.id.as_str()));
}

#[tokio::test]
async fn test_product_update_is_partial_and_idempotent() {
    let (catalogue, _) = services();
    let product = catalogue.add_product(milk("dairy")).await.unwrap();

    let patch = UpdateProductRequest {
        name: Some("Milk 2.5%".into()),
        ..UpdateProductRequest::default()
    };
    catalogue
        .update_product(&product.id, patch.clone())
        .await
        .unwrap();
    let once = catalogue.get_product(&product.id).await.unwrap();
    catalogue.update_product(&product.id, patch).await.unwrap();
    let twice = catalogue.get_product(&product.id).await.unwrap();

    assert_eq!(once, twice);
    assert_eq!(once.name, "Milk 2.5%");
    assert_eq!(once.brand, "Lactel");
    assert_eq!(once.barcode, "4870000000017");
}

#[tokio::test]
async fn test_missing_records_are_not_found() {
    let (catalogue, _) = services();

    assert!(catalogue.get_category("nope").await.unwrap_err().is_not_found());
    assert!(catalogue.delete_category("nope").await.unwrap_err().is_not_found());
    assert!(catalogue.get_product("nope").await.unwrap_err().is_not_found());
    assert!(catalogue
        .update_product("nope", UpdateProductRequest::default())
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn test_deleted_product_is_gone() {
    let (catalogue, _) = services();
    let product = catalogue.add_product(milk("dairy")).await.unwrap();

    catalogue.delete_product(&product.id).await.unwrap();

    assert!(catalogue.list_products().await.unwrap().is_empty());
    assert!(catalogue.delete_product(&product.id).await.unwrap_err().is_not_found());
}
