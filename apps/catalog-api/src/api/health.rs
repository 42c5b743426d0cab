//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use database::postgres::check_health;
use serde_json::{Value, json};

use crate::state::{AppState, Backend};

type ReadyResult = Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)>;

/// Postgres answers `SELECT 1`, or there is no database to wait for
async fn ready(State(state): State<AppState>) -> ReadyResult {
    match state.backend {
        Backend::InMemory(_) => Ok((
            StatusCode::OK,
            Json(json!({ "status": "ready", "database": "in-memory" })),
        )),
        Backend::Postgres { db, .. } => {
            let checks: Vec<(&str, HealthCheckFuture)> = vec![(
                "database",
                Box::pin(async move { check_health(&db).await.map_err(|e| e.to_string()) }),
            )];
            run_health_checks(checks).await
        }
    }
}

pub fn ready_router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
