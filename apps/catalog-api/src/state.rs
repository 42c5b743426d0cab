//! Application state management

use database::postgres::DatabaseConnection;
use domain_categories::InMemoryCategoryRepository;
use std::time::Duration;

/// Storage selected at startup
#[derive(Clone)]
pub enum Backend {
    /// Process-local stores; the category store is shared with products
    InMemory(InMemoryCategoryRepository),
    Postgres {
        db: DatabaseConnection,
        query_timeout: Duration,
    },
}

impl Backend {
    pub fn name(&self) -> &'static str {
        match self {
            Backend::InMemory(_) => "in-memory",
            Backend::Postgres { .. } => "postgres",
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub backend: Backend,
}

impl AppState {
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::InMemory(InMemoryCategoryRepository::new()),
        }
    }

    pub fn postgres(db: DatabaseConnection, query_timeout: Duration) -> Self {
        Self {
            backend: Backend::Postgres { db, query_timeout },
        }
    }
}
