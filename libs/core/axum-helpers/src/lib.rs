//! # Axum Helpers
//!
//! Shared HTTP plumbing for the catalog services.
//!
//! ## Modules
//!
//! - **[`envelope`]**: the `{data, errors}` response wrapper
//! - **[`errors`]**: `AppError` and its mapping to status codes and envelopes
//! - **[`extractors`]**: integer path ids and validated JSON bodies
//! - **[`server`]**: router assembly, health endpoints, graceful shutdown
//! - **[`http`]**: response header middleware
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_router, health_router, serve};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! let config = ServerConfig::default();
//! let app = create_router::<ApiDoc>(Router::new(), health_router(), &config);
//! serve(app, &config, async {}).await?;
//! ```

pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use envelope::{Envelope, ErrorBody};
pub use errors::{AppError, ErrorCode};
pub use extractors::{IdPath, ValidatedJson};
pub use http::security_headers;
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, close_postgres, create_router,
    health_router, run_health_checks, serve,
};
