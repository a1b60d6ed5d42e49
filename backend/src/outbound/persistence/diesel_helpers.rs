//! Shared error mapping and blocking-task plumbing for Diesel adapters.

use diesel::sqlite::SqliteConnection;

use crate::domain::ports::StoreError;

use super::pool::DbPool;

/// Map Diesel errors to port-level store errors.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> StoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match error {
        DieselError::NotFound => StoreError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            StoreError::conflict(info.message().to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            StoreError::conflict(info.message().to_owned())
        }
        other => StoreError::query(other.to_string()),
    }
}

/// Run a Diesel closure on the blocking thread pool with a pooled connection.
///
/// SQLite has no async driver, so adapters hand their synchronous work to
/// `spawn_blocking` and keep the async port signature.
pub(crate) async fn with_connection<T, F>(pool: &DbPool, op: F) -> Result<T, StoreError>
where
    F: FnOnce(&mut SqliteConnection) -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = pool
            .get()
            .map_err(|error| StoreError::connection(error.to_string()))?;
        op(&mut conn)
    })
    .await
    .map_err(|error| StoreError::query(format!("blocking task failed: {error}")))?
}
