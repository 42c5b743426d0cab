//! Locating migration pairs in a directory of SQL files.
//!
//! Shared by the build script, which embeds every pair, and by the scaffolder.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One `NNNNNN_name.up.sql` / `NNNNNN_name.down.sql` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlPair {
    pub version: u32,
    /// Migration name as recorded in `seaql_migrations`, e.g. `m000001_create_categories`
    pub name: String,
    pub up: PathBuf,
    pub down: PathBuf,
}

/// Every pair in `dir`, ordered by version.
///
/// Files that do not follow the naming scheme are ignored. An up script
/// without its down script is an error.
pub fn discover(dir: &Path) -> io::Result<Vec<SqlPair>> {
    let mut pairs = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(stem) = file_name.to_str().and_then(|n| n.strip_suffix(".up.sql")) else {
            continue;
        };
        let Some(version) = version_of(stem) else {
            continue;
        };

        let down = dir.join(format!("{stem}.down.sql"));
        if !down.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("migration {stem} has no down script"),
            ));
        }

        pairs.push(SqlPair {
            version,
            name: format!("m{stem}"),
            up: entry.path(),
            down,
        });
    }

    pairs.sort_by(|a, b| a.version.cmp(&b.version).then_with(|| a.name.cmp(&b.name)));
    Ok(pairs)
}

/// `000042_add_sku` -> 42
fn version_of(stem: &str) -> Option<u32> {
    let (digits, rest) = stem.split_at_checked(6)?;
    if !rest.starts_with('_') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
