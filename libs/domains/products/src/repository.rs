use async_trait::async_trait;
use domain_categories::{CategoryRepository, InMemoryCategoryRepository};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// Every returned product carries the current name of its category.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// All products, ordered by id
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// Full replacement; `NotFound` when the id is absent
    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product>;

    async fn delete(&self, id: i32) -> ProductResult<()>;

    async fn count_by_id(&self, id: i32) -> ProductResult<u64>;
}

#[derive(Debug)]
struct Store {
    items: Vec<Product>,
    next_id: i32,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of ProductRepository
///
/// Holds a handle to the category store so reads can fill in
/// `category_name`. The product lock is released before categories are read.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
    categories: InMemoryCategoryRepository,
}

impl InMemoryProductRepository {
    pub fn new(categories: InMemoryCategoryRepository) -> Self {
        Self {
            store: Arc::default(),
            categories,
        }
    }

    async fn with_category_name(&self, mut product: Product) -> ProductResult<Product> {
        product.category_name = self
            .categories
            .find_by_id(product.category_id)
            .await?
            .map(|c| c.name)
            .unwrap_or_default();
        Ok(product)
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = {
            let mut store = self.store.write().await;
            let product = Product::new(store.next_id, input);
            store.next_id += 1;
            store.items.push(product.clone());
            product
        };

        tracing::debug!(product_id = product.id, "Stored product");
        self.with_category_name(product).await
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let found = self
            .store
            .read()
            .await
            .items
            .iter()
            .find(|p| p.id == id)
            .cloned();

        match found {
            Some(product) => Ok(Some(self.with_category_name(product).await?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let mut products = self.store.read().await.items.clone();

        let names: HashMap<i32, String> = self
            .categories
            .find_all()
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        for product in &mut products {
            product.category_name = names
                .get(&product.category_id)
                .cloned()
                .unwrap_or_default();
        }
        Ok(products)
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        let product = {
            let mut store = self.store.write().await;
            let product = store
                .items
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(ProductError::NotFound(id))?;
            product.apply_update(input);
            product.clone()
        };

        self.with_category_name(product).await
    }

    async fn delete(&self, id: i32) -> ProductResult<()> {
        let mut store = self.store.write().await;

        let index = store
            .items
            .iter()
            .position(|p| p.id == id)
            .ok_or(ProductError::NotFound(id))?;
        store.items.remove(index);

        Ok(())
    }

    async fn count_by_id(&self, id: i32) -> ProductResult<u64> {
        let store = self.store.read().await;
        Ok(store.items.iter().filter(|p| p.id == id).count() as u64)
    }
}
