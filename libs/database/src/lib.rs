//! PostgreSQL access layer shared by the catalog domains
//!
//! Provides connection management with retry, pool configuration derived from
//! `core_config::database::DatabaseConfig`, a readiness probe, and a
//! per-statement timeout wrapper used by the relational repositories.
//!
//! # Example
//!
//! ```ignore
//! use core_config::database::DatabaseConfig;
//! use database::postgres::{self, PostgresConfig};
//!
//! let settings = DatabaseConfig::from_env_optional()?.expect("DB_HOST is set");
//! let db = postgres::connect_from_config_with_retry(PostgresConfig::from(&settings), None).await?;
//! postgres::check_health(&db).await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
