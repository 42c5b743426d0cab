use sea_orm_migration::prelude::*;

/// Splits a SQL script on `;` and runs each non-empty statement.
///
/// Statements are plain DDL; no dollar-quoted bodies.
pub(crate) async fn run(manager: &SchemaManager<'_>, sql: &str) -> Result<(), DbErr> {
    let db = manager.get_connection();
    for statement in statements(sql) {
        db.execute_unprepared(statement).await?;
    }
    Ok(())
}

fn statements(sql: &str) -> impl Iterator<Item = &str> {
    sql.split(';').map(str::trim).filter(|chunk| {
        chunk.lines().any(|line| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with("--")
        })
    })
}
