use axum_helpers::errors::validation_message;
use domain_categories::CategoryRepository;
use std::sync::Arc;
use tracing::{Span, instrument};
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
///
/// Referential integrity is checked here against `C`, so both storage
/// backends reject an unknown `category_id` the same way.
pub struct ProductService<R: ProductRepository, C: CategoryRepository> {
    repository: Arc<R>,
    categories: Arc<C>,
    span: Span,
}

impl<R: ProductRepository, C: CategoryRepository> ProductService<R, C> {
    pub fn new(repository: R, categories: C) -> Self {
        Self {
            repository: Arc::new(repository),
            categories: Arc::new(categories),
            span: tracing::info_span!("products"),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Create a new product; price is rounded to two decimal places before validation
    #[instrument(parent = &self.span, skip(self, input), fields(category_id = input.category_id))]
    pub async fn create_product(&self, mut input: CreateProduct) -> ProductResult<Product> {
        input.price = input.price.round_dp(2);
        validate(&input)?;
        self.ensure_category(input.category_id).await?;

        let product = self
            .repository
            .create(input)
            .await
            .inspect_err(|e| log_failure("create", None, e))?;

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    #[instrument(parent = &self.span, skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository
            .find_all()
            .await
            .inspect_err(|e| log_failure("list", None, e))
    }

    #[instrument(parent = &self.span, skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await
            .inspect_err(|e| log_failure("get", Some(id), e))?
            .ok_or(ProductError::NotFound(id))
    }

    /// Replace every field of a product
    #[instrument(parent = &self.span, skip(self, input))]
    pub async fn update_product(&self, id: i32, mut input: UpdateProduct) -> ProductResult<Product> {
        input.price = input.price.round_dp(2);
        validate(&input)?;
        self.get_product(id).await?;
        self.ensure_category(input.category_id).await?;

        let product = self
            .repository
            .update(id, input)
            .await
            .inspect_err(|e| log_failure("update", Some(id), e))?;

        tracing::info!(product_id = id, "Updated product");
        Ok(product)
    }

    #[instrument(parent = &self.span, skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        self.get_product(id).await?;

        self.repository
            .delete(id)
            .await
            .inspect_err(|e| log_failure("delete", Some(id), e))?;

        tracing::info!(product_id = id, "Deleted product");
        Ok(())
    }

    async fn ensure_category(&self, category_id: i32) -> ProductResult<()> {
        let count = self
            .categories
            .count_by_id(category_id)
            .await
            .map_err(ProductError::from)
            .inspect_err(|e| log_failure("category_lookup", None, e))?;

        if count == 0 {
            tracing::debug!(category_id, "Unknown category");
            return Err(ProductError::Validation(format!(
                "category {category_id} does not exist"
            )));
        }
        Ok(())
    }
}

fn validate<T: Validate>(input: &T) -> ProductResult<()> {
    input
        .validate()
        .map_err(|e| ProductError::Validation(validation_message(&e)))
}

fn log_failure(operation: &'static str, id: Option<i32>, err: &ProductError) {
    match err {
        ProductError::NotFound(_) => {
            tracing::debug!(operation, product_id = ?id, "Product not found")
        }
        ProductError::Validation(_) => {}
        ProductError::Internal(_) => {
            tracing::error!(operation, product_id = ?id, error = %err, "Product repository failure")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use chrono::Utc;
    use domain_categories::{CreateCategory, InMemoryCategoryRepository};
    use mockall::predicate::eq;
    use rust_decimal::Decimal;

    fn product(id: i32, input: &CreateProduct) -> Product {
        Product {
            id,
            name: input.name.clone(),
            price: input.price,
            stock: input.stock,
            category_id: input.category_id,
            category_name: "Electronics".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn laptop(price: Decimal, category_id: i32) -> CreateProduct {
        CreateProduct {
            name: "Laptop".into(),
            price,
            stock: 2,
            category_id,
        }
    }

    async fn categories() -> InMemoryCategoryRepository {
        let repo = InMemoryCategoryRepository::new();
        repo.create(CreateCategory {
            name: "Electronics".into(),
            description: String::new(),
        })
        .await
        .unwrap();
        repo
    }

    #[tokio::test]
    async fn test_unknown_category_is_rejected_before_insert() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo, categories().await);
        let result = service.create_product(laptop(Decimal::ONE, 42)).await;

        assert!(
            matches!(result, Err(ProductError::Validation(ref m)) if m == "category 42 does not exist")
        );
    }

    #[tokio::test]
    async fn test_price_is_rounded_to_cents() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .withf(|input| input.price == Decimal::new(1000, 2))
            .returning(|input| Ok(product(1, &input)));

        let service = ProductService::new(mock_repo, categories().await);
        let created = service
            .create_product(laptop(Decimal::new(9_999, 3), 1))
            .await
            .unwrap();

        assert_eq!(created.price.to_string(), "10.00");
    }

    #[tokio::test]
    async fn test_invalid_fields_never_reach_storage() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo, categories().await);

        let zero_price = service.create_product(laptop(Decimal::ZERO, 1)).await;
        assert!(
            matches!(zero_price, Err(ProductError::Validation(ref m)) if m == "price must be greater than 0")
        );

        let mut negative_stock = laptop(Decimal::ONE, 1);
        negative_stock.stock = -1;
        assert!(matches!(
            service.create_product(negative_stock).await,
            Err(ProductError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_price_rounding_to_zero_is_rejected_on_create() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();

        let service = ProductService::new(mock_repo, categories().await);
        let result = service
            .create_product(laptop(Decimal::new(1, 3), 1))
            .await;

        assert!(
            matches!(result, Err(ProductError::Validation(ref m)) if m == "price must be greater than 0")
        );
    }

    #[tokio::test]
    async fn test_price_rounding_to_zero_is_rejected_on_update() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_find_by_id().never();
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo, categories().await);
        let result = service
            .update_product(
                3,
                UpdateProduct {
                    name: "Laptop".into(),
                    price: Decimal::new(1, 3),
                    stock: 1,
                    category_id: 1,
                },
            )
            .await;

        assert!(
            matches!(result, Err(ProductError::Validation(ref m)) if m == "price must be greater than 0")
        );
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(8))
            .returning(|_| Ok(None));
        mock_repo.expect_update().never();

        let service = ProductService::new(mock_repo, categories().await);
        let result = service
            .update_product(
                8,
                UpdateProduct {
                    name: "Laptop".into(),
                    price: Decimal::ONE,
                    stock: 0,
                    category_id: 1,
                },
            )
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(8))));
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_id()
            .returning(|id| Ok(Some(product(id, &laptop(Decimal::ONE, 1)))));
        mock_repo.expect_delete().with(eq(2)).times(1).returning(|_| Ok(()));

        let service = ProductService::new(mock_repo, categories().await);

        assert!(service.delete_product(2).await.is_ok());
    }

    #[tokio::test]
    async fn test_repository_failure_is_internal() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_all()
            .returning(|| Err(ProductError::Internal("pool timed out".into())));

        let service = ProductService::new(mock_repo, categories().await);

        assert!(matches!(
            service.list_products().await,
            Err(ProductError::Internal(_))
        ));
    }
}
