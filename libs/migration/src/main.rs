use clap::{Parser, Subcommand};
use core_config::database::DatabaseConfig;
use core_config::tracing::{LogConfig, init_tracing, install_color_eyre};
use core_config::FromEnv;
use database::postgres::{
    DatabaseConnection, PostgresConfig, connect_from_config, run_migrations,
};
use eyre::Result;
use migration::{Migrator, MigratorTrait, scaffold};
use std::path::PathBuf;
use tracing::info;

/// Apply, roll back, inspect or scaffold catalog schema migrations.
///
/// The connection is built from the same DB_* variables as the API.
#[derive(Parser)]
#[command(name = "migration", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply all pending migrations
    Up,
    /// Roll back the most recent migration
    Down,
    /// List applied and pending migrations
    Status,
    /// Write the next numbered up/down SQL pair
    Create {
        name: String,
        #[arg(long, env = "MIGRATIONS_DIR", default_value = "libs/migration/sql")]
        dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();
    init_tracing(&LogConfig::from_env()?);

    match Cli::parse().command {
        Command::Create { name, dir } => {
            let created = scaffold::create(&dir, &name, chrono::Local::now().naive_local())?;
            info!(
                up = %created.up.display(),
                down = %created.down.display(),
                "Created migration files"
            );
        }
        Command::Up => {
            let db = connect().await?;
            let pending = Migrator::get_pending_migrations(&db).await?;
            if pending.is_empty() {
                info!("No new migrations to apply");
            } else {
                run_migrations::<Migrator>(&db, "catalog").await?;
                info!(applied = pending.len(), "Migrations applied successfully");
            }
            db.close().await?;
        }
        Command::Down => {
            let db = connect().await?;
            Migrator::down(&db, Some(1)).await?;
            info!("Migration rolled back successfully");
            db.close().await?;
        }
        Command::Status => {
            let db = connect().await?;
            for migration in Migrator::get_applied_migrations(&db).await? {
                println!("applied  {}", migration.name());
            }
            for migration in Migrator::get_pending_migrations(&db).await? {
                println!("pending  {}", migration.name());
            }
            db.close().await?;
        }
    }

    Ok(())
}

async fn connect() -> Result<DatabaseConnection> {
    let db_config = DatabaseConfig::from_env()?;
    info!(database = %db_config.redacted_url(), "Connecting");
    Ok(connect_from_config(PostgresConfig::from(&db_config)).await?)
}
