//! Categories API routes

use axum::Router;
use domain_categories::{CategoryService, PgCategoryRepository, handlers};

use crate::state::{AppState, Backend};

pub fn router(state: &AppState) -> Router {
    let span = tracing::info_span!("categories", backend = state.backend.name());

    match &state.backend {
        Backend::InMemory(repository) => {
            handlers::router(CategoryService::new(repository.clone()).with_span(span))
        }
        Backend::Postgres { db, query_timeout } => {
            let repository = PgCategoryRepository::new(db.clone()).with_query_timeout(*query_timeout);
            handlers::router(CategoryService::new(repository).with_span(span))
        }
    }
}
