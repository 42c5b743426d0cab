//! Configuration for the Catalog API

use core_config::database::DatabaseConfig;
use core_config::server::ServerConfig;
use core_config::tracing::LogConfig;
use core_config::{ConfigError, FromEnv};

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub log: LogConfig,
    /// `None` when `DB_HOST` is unset; the in-memory repositories are used
    pub database: Option<DatabaseConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            log: LogConfig::from_env()?,
            database: DatabaseConfig::from_env_optional()?,
        })
    }
}
