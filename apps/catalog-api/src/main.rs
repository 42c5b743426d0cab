//! Catalog API - categories and products over REST

use axum_helpers::{close_postgres, serve};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{PostgresConfig, connect_from_config_with_retry};
use tracing::{error, info};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::{AppState, Backend};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.log);

    let state = match &config.database {
        Some(settings) => {
            info!(database = %settings.redacted_url(), "Connecting to PostgreSQL");

            let pg_config = PostgresConfig::from(settings);
            let query_timeout = pg_config.query_timeout;
            let db = connect_from_config_with_retry(pg_config, None)
                .await
                .inspect_err(|e| error!(error = %e, "Could not connect to PostgreSQL"))?;

            AppState::postgres(db, query_timeout)
        }
        None => {
            info!("DB_HOST not set, using in-memory repositories");
            AppState::in_memory()
        }
    };

    let app = api::app(&state, &config.server);

    info!(
        environment = %config.log.environment,
        backend = state.backend.name(),
        "Starting Catalog API on {}",
        config.server.address()
    );

    serve(app, &config.server, async move {
        if let Backend::Postgres { db, .. } = state.backend {
            close_postgres(db, "catalog").await;
        }
    })
    .await?;

    info!("Catalog API shutdown complete");
    Ok(())
}
