use axum_helpers::errors::validation_message;
use std::sync::Arc;
use tracing::{Span, instrument};
use validator::Validate;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, CreateCategory, UpdateCategory};
use crate::repository::CategoryRepository;

/// Service layer for Category business logic
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
    span: Span,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            span: tracing::info_span!("categories"),
        }
    }

    /// Parent span for every operation's span
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Create a new category
    #[instrument(parent = &self.span, skip(self, input))]
    pub async fn create_category(&self, input: CreateCategory) -> CategoryResult<Category> {
        validate(&input)?;

        let category = self
            .repository
            .create(input)
            .await
            .inspect_err(|e| log_failure("create", None, e))?;

        tracing::info!(category_id = category.id, "Created category");
        Ok(category)
    }

    /// List all categories ordered by id
    #[instrument(parent = &self.span, skip(self))]
    pub async fn list_categories(&self) -> CategoryResult<Vec<Category>> {
        self.repository
            .find_all()
            .await
            .inspect_err(|e| log_failure("list", None, e))
    }

    /// Get a category by ID
    #[instrument(parent = &self.span, skip(self))]
    pub async fn get_category(&self, id: i32) -> CategoryResult<Category> {
        self.repository
            .find_by_id(id)
            .await
            .inspect_err(|e| log_failure("get", Some(id), e))?
            .ok_or(CategoryError::NotFound(id))
    }

    /// Replace a category's name and description
    #[instrument(parent = &self.span, skip(self, input))]
    pub async fn update_category(
        &self,
        id: i32,
        input: UpdateCategory,
    ) -> CategoryResult<Category> {
        validate(&input)?;
        self.get_category(id).await?;

        let category = self
            .repository
            .update(id, input)
            .await
            .inspect_err(|e| log_failure("update", Some(id), e))?;

        tracing::info!(category_id = id, "Updated category");
        Ok(category)
    }

    /// Delete a category
    #[instrument(parent = &self.span, skip(self))]
    pub async fn delete_category(&self, id: i32) -> CategoryResult<()> {
        self.get_category(id).await?;

        self.repository
            .delete(id)
            .await
            .inspect_err(|e| log_failure("delete", Some(id), e))?;

        tracing::info!(category_id = id, "Deleted category");
        Ok(())
    }
}

fn validate<T: Validate>(input: &T) -> CategoryResult<()> {
    input
        .validate()
        .map_err(|e| CategoryError::Validation(validation_message(&e)))
}

/// Storage failures are logged here with the operation and id; not-found is
/// an expected outcome and stays at debug.
fn log_failure(operation: &'static str, id: Option<i32>, err: &CategoryError) {
    match err {
        CategoryError::NotFound(_) => {
            tracing::debug!(operation, category_id = ?id, "Category not found")
        }
        _ => tracing::error!(operation, category_id = ?id, error = %err, "Category repository failure"),
    }
}
