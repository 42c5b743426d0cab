use sea_orm::DbErr;
use std::future::Future;
use std::time::Duration;

use crate::common::{DatabaseError, DatabaseResult};

/// Run one database statement under a deadline.
///
/// The statement future is dropped when the deadline passes, which cancels the
/// query on the pooled connection. The same happens when the caller itself is
/// dropped (client disconnect, request timeout), since the query is awaited
/// inline rather than spawned.
///
/// ```ignore
/// let rows = bounded("categories.find_all", timeout, Entity::find().all(&db)).await?;
/// ```
pub async fn bounded<T, F>(operation: &'static str, timeout: Duration, statement: F) -> DatabaseResult<T>
where
    F: Future<Output = Result<T, DbErr>>,
{
    match tokio::time::timeout(timeout, statement).await {
        Ok(result) => result.map_err(DatabaseError::from),
        Err(_) => {
            tracing::warn!(operation, timeout_ms = timeout.as_millis() as u64, "Query timed out");
            Err(DatabaseError::Timeout { operation, timeout })
        }
    }
}
