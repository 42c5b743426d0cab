//! Products API routes

use axum::Router;
use domain_categories::PgCategoryRepository;
use domain_products::{InMemoryProductRepository, PgProductRepository, ProductService, handlers};

use crate::state::{AppState, Backend};

pub fn router(state: &AppState) -> Router {
    let span = tracing::info_span!("products", backend = state.backend.name());

    match &state.backend {
        Backend::InMemory(categories) => {
            let repository = InMemoryProductRepository::new(categories.clone());
            handlers::router(ProductService::new(repository, categories.clone()).with_span(span))
        }
        Backend::Postgres { db, query_timeout } => {
            let repository = PgProductRepository::new(db.clone()).with_query_timeout(*query_timeout);
            let categories =
                PgCategoryRepository::new(db.clone()).with_query_timeout(*query_timeout);
            handlers::router(ProductService::new(repository, categories).with_span(span))
        }
    }
}
