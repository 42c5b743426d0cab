//! API routes module

pub mod categories;
pub mod health;
pub mod products;

use axum::Router;
use axum_helpers::{create_router, health_router};
use core_config::server::ServerConfig;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create all `/api` routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/categories", categories::router(state))
        .nest("/products", products::router(state))
}

/// The complete application: API, docs, liveness and readiness
pub fn app(state: &AppState, server: &ServerConfig) -> Router {
    let health = health_router().merge(health::ready_router(state.clone()));
    create_router::<ApiDoc>(routes(state), health, server)
}
