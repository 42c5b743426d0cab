//! Schema migrations for the catalog database.
//!
//! Each migration is a pair of plain SQL files under `sql/`
//! (`NNNNNN_name.up.sql` / `NNNNNN_name.down.sql`). The build script embeds
//! every pair it finds there, so no Rust module has to be written per
//! migration.

pub use sea_orm_migration::prelude::*;
use sea_orm_migration::MigrationName;

mod discover;
pub mod scaffold;
mod script;

pub use discover::{SqlPair, discover};

/// A migration backed by an embedded up/down SQL pair
#[derive(Debug, Clone, Copy)]
pub struct SqlMigration {
    name: &'static str,
    up: &'static str,
    down: &'static str,
}

/// Every pair under `sql/`, ordered by version
pub static SQL_MIGRATIONS: &[SqlMigration] = include!(concat!(env!("OUT_DIR"), "/migrations.rs"));

impl MigrationName for SqlMigration {
    fn name(&self) -> &str {
        self.name
    }
}

#[async_trait::async_trait]
impl MigrationTrait for SqlMigration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        script::run(manager, self.up).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        script::run(manager, self.down).await
    }
}

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        SQL_MIGRATIONS
            .iter()
            .map(|m| Box::new(*m) as Box<dyn MigrationTrait>)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn migration_names() -> Vec<String> {
        Migrator::migrations()
            .iter()
            .map(|m| m.name().to_string())
            .collect()
    }

    #[test]
    fn test_migrations_are_ordered() {
        assert_eq!(
            migration_names(),
            vec!["m000001_create_categories", "m000002_create_products"]
        );
    }

    #[test]
    fn test_registry_matches_sql_directory() {
        let sql_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("sql");
        let on_disk: Vec<String> = discover(&sql_dir)
            .unwrap()
            .into_iter()
            .map(|pair| pair.name)
            .collect();

        assert_eq!(migration_names(), on_disk);
    }

    #[test]
    fn test_embedded_scripts_are_the_sql_files() {
        let products = SQL_MIGRATIONS
            .iter()
            .find(|m| m.name == "m000002_create_products")
            .unwrap();

        assert!(products.up.contains("CREATE TABLE IF NOT EXISTS products"));
        assert!(products.down.contains("DROP TABLE"));
    }
}
