use async_trait::async_trait;
use chrono::Utc;
use database::postgres::bounded;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};
use std::time::Duration;

use crate::{
    entity,
    error::{CategoryError, CategoryResult},
    models::{Category, CreateCategory, UpdateCategory},
    repository::CategoryRepository,
};

/// PostgreSQL implementation of CategoryRepository
///
/// Every statement runs under `query_timeout`; expiry surfaces as
/// `CategoryError::Internal`.
#[derive(Clone)]
pub struct PgCategoryRepository {
    db: DatabaseConnection,
    query_timeout: Duration,
}

impl PgCategoryRepository {
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
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category> {
        let active_model: entity::ActiveModel = input.into();

        let model = bounded(
            "categories.create",
            self.query_timeout,
            active_model.insert(&self.db),
        )
        .await?;

        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> CategoryResult<Option<Category>> {
        let model = bounded(
            "categories.find_by_id",
            self.query_timeout,
            entity::Entity::find_by_id(id).one(&self.db),
        )
        .await?;

        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> CategoryResult<Vec<Category>> {
        let models = bounded(
            "categories.find_all",
            self.query_timeout,
            entity::Entity::find()
                .order_by_asc(entity::Column::Id)
                .all(&self.db),
        )
        .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, input: UpdateCategory) -> CategoryResult<Category> {
        // Probe first so "no such row" is not confused with "nothing changed"
        if self.count_by_id(id).await? == 0 {
            return Err(CategoryError::NotFound(id));
        }

        let active_model = entity::ActiveModel {
            id: Unchanged(id),
            name: Set(input.name),
            description: Set(input.description),
            created_at: NotSet,
            updated_at: Set(Utc::now().into()),
        };

        match bounded(
            "categories.update",
            self.query_timeout,
            active_model.update(&self.db),
        )
        .await
        {
            Ok(model) => Ok(model.into()),
            Err(e) if e.is_not_found() => Err(CategoryError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> CategoryResult<()> {
        let result = bounded(
            "categories.delete",
            self.query_timeout,
            entity::Entity::delete_by_id(id).exec(&self.db),
        )
        .await?;

        if result.rows_affected == 0 {
            return Err(CategoryError::NotFound(id));
        }
        Ok(())
    }

    async fn count_by_id(&self, id: i32) -> CategoryResult<u64> {
        let count = bounded(
            "categories.count_by_id",
            self.query_timeout,
            entity::Entity::find_by_id(id).count(&self.db),
        )
        .await?;

        Ok(count)
    }
}
