//! Product service - business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
///
/// Handles validation, not-found translation, and orchestrates repository
/// operations.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product with validation
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a product by id
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// List products, dispatching to the matching finder
    ///
    /// Filters apply in priority order (name, then category, then
    /// availability); with no filter set, every product is returned.
    pub async fn list_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        if let Some(name) = filter.name {
            self.repository.find_by_name(&name).await
        } else if let Some(category) = filter.category {
            self.repository.find_by_category(category).await
        } else if let Some(available) = filter.available {
            self.repository.find_by_availability(available).await
        } else {
            self.repository.all().await
        }
    }

    /// Update an existing product from a full payload
    #[instrument(skip(self, input), fields(product_id = %id))]
    pub async fn update_product(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let mut product = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        product.apply_update(input);

        self.repository.update(&product).await
    }

    /// Delete a product
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }

    /// Count all products
    pub async fn count_products(&self) -> ProductResult<u64> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::repository::MockProductRepository;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn fedora_payload() -> CreateProduct {
        CreateProduct {
            name: "Fedora".to_string(),
            description: "A red hat".to_string(),
            price: Decimal::from_str("12.50").unwrap(),
            available: true,
            category: Category::Cloths,
        }
    }

    fn saved_fedora() -> Product {
        let mut product = Product::new(fedora_payload());
        product.id = Some(1);
        product
    }

    #[tokio::test]
    async fn test_create_product_passes_through() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_create()
            .times(1)
            .returning(|input| Ok(Product {
                id: Some(1),
                ..Product::new(input)
            }));

        let service = ProductService::new(repository);
        let product = service.create_product(fedora_payload()).await.unwrap();

        assert_eq!(product.id, Some(1));
        assert_eq!(product.name, "Fedora");
    }

    #[tokio::test]
    async fn test_create_product_rejects_empty_name() {
        let mut repository = MockProductRepository::new();
        repository.expect_create().times(0);

        let service = ProductService::new(repository);
        let result = service
            .create_product(CreateProduct {
                name: String::new(),
                ..fedora_payload()
            })
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut repository = MockProductRepository::new();
        repository.expect_get_by_id().returning(|_| Ok(None));

        let service = ProductService::new(repository);
        let result = service.get_product(42).await;

        assert!(matches!(result, Err(ProductError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_list_products_without_filters_returns_all() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_all()
            .times(1)
            .returning(|| Ok(vec![saved_fedora()]));

        let service = ProductService::new(repository);
        let products = service.list_products(ProductFilter::default()).await.unwrap();

        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn test_list_products_dispatches_to_name_finder() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_find_by_name()
            .withf(|name| name == "fedora")
            .times(1)
            .returning(|_| Ok(vec![saved_fedora()]));

        let service = ProductService::new(repository);
        let filter = ProductFilter {
            name: Some("fedora".to_string()),
            ..ProductFilter::default()
        };

        let products = service.list_products(filter).await.unwrap();
        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn test_list_products_dispatches_to_category_finder() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_find_by_category()
            .withf(|category| *category == Category::Cloths)
            .times(1)
            .returning(|_| Ok(vec![saved_fedora()]));

        let service = ProductService::new(repository);
        let filter = ProductFilter {
            category: Some(Category::Cloths),
            ..ProductFilter::default()
        };

        let products = service.list_products(filter).await.unwrap();
        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn test_list_products_dispatches_to_availability_finder() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_find_by_availability()
            .withf(|available| !*available)
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = ProductService::new(repository);
        let filter = ProductFilter {
            available: Some(false),
            ..ProductFilter::default()
        };

        let products = service.list_products(filter).await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_update_product_not_found() {
        let mut repository = MockProductRepository::new();
        repository.expect_get_by_id().returning(|_| Ok(None));
        repository.expect_update().times(0);

        let service = ProductService::new(repository);
        let result = service
            .update_product(
                42,
                UpdateProduct {
                    name: "Updated Name".to_string(),
                    description: "A red hat".to_string(),
                    price: Decimal::from_str("12.50").unwrap(),
                    available: true,
                    category: Category::Cloths,
                },
            )
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_update_product_applies_payload() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_get_by_id()
            .returning(|_| Ok(Some(saved_fedora())));
        repository
            .expect_update()
            .withf(|product| product.id == Some(1) && product.name == "Updated Name")
            .times(1)
            .returning(|product| Ok(product.clone()));

        let service = ProductService::new(repository);
        let product = service
            .update_product(
                1,
                UpdateProduct {
                    name: "Updated Name".to_string(),
                    description: "A red hat".to_string(),
                    price: Decimal::from_str("12.50").unwrap(),
                    available: true,
                    category: Category::Cloths,
                },
            )
            .await
            .unwrap();

        assert_eq!(product.name, "Updated Name");
    }

    #[tokio::test]
    async fn test_delete_product_not_found() {
        let mut repository = MockProductRepository::new();
        repository.expect_delete().returning(|_| Ok(false));

        let service = ProductService::new(repository);
        let result = service.delete_product(42).await;

        assert!(matches!(result, Err(ProductError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_delete_product_success() {
        let mut repository = MockProductRepository::new();
        repository.expect_delete().returning(|_| Ok(true));

        let service = ProductService::new(repository);
        assert!(service.delete_product(1).await.is_ok());
    }
}
