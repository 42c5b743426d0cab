//! Build script for the migration crate.
//!
//! Embeds every pair under `sql/` so a file written by `migration create`
//! is picked up by `Migrator` on the next build.

use std::env;
use std::fmt::Write;
use std::fs;
use std::path::Path;

#[path = "src/discover.rs"]
mod discover;

fn main() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let sql_dir = Path::new(&manifest_dir).join("sql");

    // Directory mtime changes when files are added or removed
    println!("cargo:rerun-if-changed={}", sql_dir.display());

    let pairs = discover::discover(&sql_dir).expect("Failed to read sql/ migrations");

    let mut registry = String::from("&[\n");
    for pair in &pairs {
        println!("cargo:rerun-if-changed={}", pair.up.display());
        println!("cargo:rerun-if-changed={}", pair.down.display());
        writeln!(
            registry,
            "    SqlMigration {{ name: {:?}, up: include_str!({:?}), down: include_str!({:?}) }},",
            pair.name,
            pair.up.display().to_string(),
            pair.down.display().to_string(),
        )
        .expect("writing to a String cannot fail");
    }
    registry.push(']');

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR must be set by Cargo");
    fs::write(Path::new(&out_dir).join("migrations.rs"), registry)
        .expect("Failed to write migration registry");
}
