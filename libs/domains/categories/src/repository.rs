use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, CreateCategory, UpdateCategory};

/// Repository trait for Category persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Store a new category and return it with its assigned id
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category>;

    async fn find_by_id(&self, id: i32) -> CategoryResult<Option<Category>>;

    /// All categories, ordered by id
    async fn find_all(&self) -> CategoryResult<Vec<Category>>;

    /// Replace name and description; `NotFound` when the id is absent
    async fn update(&self, id: i32, input: UpdateCategory) -> CategoryResult<Category>;

    /// `NotFound` when the id is absent
    async fn delete(&self, id: i32) -> CategoryResult<()>;

    /// 0 or 1; used as an existence probe
    async fn count_by_id(&self, id: i32) -> CategoryResult<u64>;
}

#[derive(Debug)]
struct Store {
    items: Vec<Category>,
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

/// In-memory implementation of CategoryRepository
///
/// Ids come from a counter starting at 1 that never hands out a deleted id
/// again. Items stay in insertion (= id) order. Clones share the store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCategoryRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category> {
        let mut store = self.store.write().await;

        let category = Category::new(store.next_id, input);
        store.next_id += 1;
        store.items.push(category.clone());

        tracing::debug!(category_id = category.id, "Stored category");
        Ok(category)
    }

    async fn find_by_id(&self, id: i32) -> CategoryResult<Option<Category>> {
        let store = self.store.read().await;
        Ok(store.items.iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self) -> CategoryResult<Vec<Category>> {
        let store = self.store.read().await;
        Ok(store.items.clone())
    }

    async fn update(&self, id: i32, input: UpdateCategory) -> CategoryResult<Category> {
        let mut store = self.store.write().await;

        let category = store
            .items
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CategoryError::NotFound(id))?;
        category.apply_update(input);

        Ok(category.clone())
    }

    async fn delete(&self, id: i32) -> CategoryResult<()> {
        let mut store = self.store.write().await;

        let index = store
            .items
            .iter()
            .position(|c| c.id == id)
            .ok_or(CategoryError::NotFound(id))?;
        store.items.remove(index);

        Ok(())
    }

    async fn count_by_id(&self, id: i32) -> CategoryResult<u64> {
        let store = self.store.read().await;
        Ok(store.items.iter().filter(|c| c.id == id).count() as u64)
    }
}
