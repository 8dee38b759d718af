use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Expr, extension::postgres::PgExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{Category, CreateProduct, Product},
    repository::ProductRepository,
};

/// PostgreSQL implementation of [`ProductRepository`] on SeaORM
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn select_all(
        &self,
        query: sea_orm::Select<entity::Entity>,
    ) -> ProductResult<Vec<Product>> {
        let models = query
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();

        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = %model.id, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;

        Ok(model.map(Into::into))
    }

    async fn all(&self) -> ProductResult<Vec<Product>> {
        self.select_all(entity::Entity::find()).await
    }

    async fn find_by_name(&self, name: &str) -> ProductResult<Vec<Product>> {
        let query = entity::Entity::find()
            .filter(Expr::col(entity::Column::Name).ilike(format!("%{}%", name)));

        self.select_all(query).await
    }

    async fn find_by_category(&self, category: Category) -> ProductResult<Vec<Product>> {
        let query = entity::Entity::find().filter(entity::Column::Category.eq(category));

        self.select_all(query).await
    }

    async fn find_by_availability(&self, available: bool) -> ProductResult<Vec<Product>> {
        let query = entity::Entity::find().filter(entity::Column::Available.eq(available));

        self.select_all(query).await
    }

    async fn find_by_price(&self, price: Decimal) -> ProductResult<Vec<Product>> {
        let query = entity::Entity::find().filter(entity::Column::Price.eq(price));

        self.select_all(query).await
    }

    async fn update(&self, product: &Product) -> ProductResult<Product> {
        // A product that has never been saved has nothing to update
        let id = product.id.ok_or(ProductError::UpdateWithoutId)?;

        let active_model = entity::ActiveModel {
            id: Set(id),
            name: Set(product.name.clone()),
            description: Set(product.description.clone()),
            price: Set(product.price),
            available: Set(product.available),
            category: Set(product.category),
        };

        let updated_model = active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => ProductError::NotFound(id),
            other => other.into(),
        })?;

        tracing::info!(product_id = %id, "Updated product");
        Ok(updated_model.into())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = %id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn count(&self) -> ProductResult<u64> {
        let count = entity::Entity::find().count(&self.db).await?;

        Ok(count)
    }
}
