use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::ProductResult;
use crate::models::{Category, CreateProduct, Product};

/// Repository trait for Product persistence
///
/// Defines the data access interface for products. The production
/// implementation is PostgreSQL ([`crate::postgres::PgProductRepository`]);
/// tests use the generated mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product; the database assigns the id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Point lookup by id; `None` when the row is absent
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Return every product
    async fn all(&self) -> ProductResult<Vec<Product>>;

    /// Products whose name contains `name`, case-insensitively
    async fn find_by_name(&self, name: &str) -> ProductResult<Vec<Product>>;

    /// Products in the given category
    async fn find_by_category(&self, category: Category) -> ProductResult<Vec<Product>>;

    /// Products with the given availability
    async fn find_by_availability(&self, available: bool) -> ProductResult<Vec<Product>>;

    /// Products with exactly the given price
    async fn find_by_price(&self, price: Decimal) -> ProductResult<Vec<Product>>;

    /// Persist the product's fields; fails with a validation error when
    /// `product.id` is `None`
    async fn update(&self, product: &Product) -> ProductResult<Product>;

    /// Delete a product by id; `false` when nothing was deleted
    async fn delete(&self, id: i32) -> ProductResult<bool>;

    /// Count all products
    async fn count(&self) -> ProductResult<u64>;
}
