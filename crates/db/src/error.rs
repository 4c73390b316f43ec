//! Failures reaching or querying the course registration store.

use thiserror::Error;

/// Everything the repositories can fail with. Callers above the `db` crate
/// treat both variants as "storage unavailable".
#[derive(Debug, Error)]
pub enum DbError {
    /// Connection, pool or query failure.
    #[error("course store query failed: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// The embedded schema could not be applied.
    #[error("course store schema could not be applied: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
