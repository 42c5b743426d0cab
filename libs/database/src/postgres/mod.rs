//! PostgreSQL connector and utilities
//!
//! Connection management, migration running, readiness probing and the
//! statement timeout used by repositories.

mod config;
mod connector;
mod health;
mod query;

pub use config::PostgresConfig;
pub use connector::{connect_from_config, connect_from_config_with_retry, run_migrations};
pub use health::check_health;
pub use query::bounded;

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
