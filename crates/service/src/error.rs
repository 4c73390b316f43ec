//! Service-level error types.

use thiserror::Error;

/// Errors produced by [`crate::CourseService`].
///
/// There are no domain errors: the only failure is the store itself.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The store could not be reached or the query failed.
    #[error("storage unavailable: {0}")]
    Storage(#[from] db::DbError),
}
