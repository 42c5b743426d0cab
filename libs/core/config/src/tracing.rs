use crate::{env_or_default, ConfigError, Environment, FromEnv};
use strum::{Display, EnumString};
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Minimum severity emitted by the application, read from `LOG_LEVEL`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    #[strum(to_string = "WARN", serialize = "WARNING")]
    Warn,
    Error,
}

impl LogLevel {
    /// Directive understood by `EnvFilter`
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Logging configuration built once by the composition root
#[derive(Clone, Debug)]
pub struct LogConfig {
    pub level: LogLevel,
    pub environment: Environment,
}

impl LogConfig {
    pub fn new(level: LogLevel, environment: Environment) -> Self {
        Self { level, environment }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{level},tower_http={level},sqlx=warn,sea_orm=warn",
                level = self.level.as_directive()
            ))
        })
    }
}

impl FromEnv for LogConfig {
    /// - LOG_LEVEL: DEBUG | INFO | WARN | ERROR (default INFO)
    /// - ENVIRONMENT: selects JSON (production) or pretty output
    fn from_env() -> Result<Self, ConfigError> {
        let level = env_or_default("LOG_LEVEL", "INFO")
            .parse()
            .map_err(|e: strum::ParseError| ConfigError::ParseError {
                key: "LOG_LEVEL".to_string(),
                details: e.to_string(),
            })?;

        Ok(Self::new(level, Environment::from_env()))
    }
}

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in the main() before any fallible operations to ensure
/// colored error output. Safe to call multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize the tracing subscriber for the whole process.
///
/// - **Production**: JSON lines, flattened events, no module targets
/// - **Development**: pretty, human-readable output
///
/// `RUST_LOG` overrides the level derived from `LOG_LEVEL`. Both variants
/// include `ErrorLayer` so eyre reports carry span traces.
///
/// Calling it again is a no-op (common in tests).
pub fn init_tracing(config: &LogConfig) {
    let filter = config.filter();

    let result = if config.environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => info!(
            environment = %config.environment,
            level = %config.level,
            "Tracing initialized"
        ),
        Err(_) => debug!("Tracing already initialized, skipping re-initialization"),
    }
}
