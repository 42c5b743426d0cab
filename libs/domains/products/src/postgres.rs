use async_trait::async_trait;
use chrono::Utc;
use database::postgres::bounded;
use domain_categories::entity as categories;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use std::time::Duration;

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{CreateProduct, Product, UpdateProduct},
    repository::ProductRepository,
};

/// PostgreSQL implementation of ProductRepository
///
/// Reads join `categories` to fill in the category name. Writes re-read the
/// row afterwards for the same reason.
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
    query_timeout: Duration,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            query_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_query_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }

    async fn reload(&self, id: i32) -> ProductResult<Product> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| ProductError::Internal(format!("product {id} vanished after write")))
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();

        let model = bounded(
            "products.create",
            self.query_timeout,
            active_model.insert(&self.db),
        )
        .await?;

        self.reload(model.id).await
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let row = bounded(
            "products.find_by_id",
            self.query_timeout,
            entity::Entity::find_by_id(id)
                .find_also_related(categories::Entity)
                .one(&self.db),
        )
        .await?;

        Ok(row.map(entity::into_product))
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let rows = bounded(
            "products.find_all",
            self.query_timeout,
            entity::Entity::find()
                .find_also_related(categories::Entity)
                .order_by_asc(entity::Column::Id)
                .all(&self.db),
        )
        .await?;

        Ok(rows.into_iter().map(entity::into_product).collect())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        if self.count_by_id(id).await? == 0 {
            return Err(ProductError::NotFound(id));
        }

        let active_model = entity::ActiveModel {
            id: Unchanged(id),
            name: Set(input.name),
            price: Set(input.price),
            stock: Set(input.stock),
            category_id: Set(input.category_id),
            created_at: NotSet,
            updated_at: Set(Utc::now().into()),
        };

        match bounded(
            "products.update",
            self.query_timeout,
            active_model.update(&self.db),
        )
        .await
        {
            Ok(_) => self.reload(id).await,
            Err(e) if e.is_not_found() => Err(ProductError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> ProductResult<()> {
        let result = bounded(
            "products.delete",
            self.query_timeout,
            entity::Entity::delete_by_id(id).exec(&self.db),
        )
        .await?;

        if result.rows_affected == 0 {
            return Err(ProductError::NotFound(id));
        }
        Ok(())
    }

    async fn count_by_id(&self, id: i32) -> ProductResult<u64> {
        let count = bounded(
            "products.count_by_id",
            self.query_timeout,
            entity::Entity::find_by_id(id).count(&self.db),
        )
        .await?;

        Ok(count)
    }
}
