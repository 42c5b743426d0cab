//! Scaffolding for new migration file pairs.

use crate::discover::discover;
use chrono::NaiveDateTime;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("invalid migration name '{0}': use lowercase letters, digits and underscores")]
    InvalidName(String),

    #[error("migration directory error: {0}")]
    Io(#[from] io::Error),
}

/// Paths of a freshly written up/down pair
#[derive(Debug)]
pub struct CreatedMigration {
    pub version: u32,
    pub up: PathBuf,
    pub down: PathBuf,
}

/// One past the highest version among the pairs in `dir` (1 for an empty dir).
pub fn next_version(dir: &Path) -> Result<u32, ScaffoldError> {
    let last = discover(dir)?.last().map_or(0, |pair| pair.version);
    Ok(last + 1)
}

/// Writes `NNNNNN_<name>.up.sql` and `NNNNNN_<name>.down.sql` into `dir`.
///
/// Pairs written into the crate's `sql/` directory become part of
/// `Migrator` on the next build.
pub fn create(dir: &Path, name: &str, now: NaiveDateTime) -> Result<CreatedMigration, ScaffoldError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if !valid {
        return Err(ScaffoldError::InvalidName(name.to_string()));
    }

    let version = next_version(dir)?;
    let created = now.format("%Y-%m-%d %H:%M:%S");

    let up = dir.join(format!("{version:06}_{name}.up.sql"));
    let down = dir.join(format!("{version:06}_{name}.down.sql"));

    fs::write(
        &up,
        format!("-- Migration: {name}\n-- Created: {created}\n\n-- Write your UP migration here\n"),
    )?;
    fs::write(
        &down,
        format!("-- Migration: {name}\n-- Created: {created}\n\n-- Write your DOWN migration here\n"),
    )?;

    Ok(CreatedMigration { version, up, down })
}
