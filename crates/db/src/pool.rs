//! Postgres pool shared by the course and enrollment repositories.
//!
//! The binary opens one pool at start-up and hands clones of it to
//! `PgCourseRepository` and `PgRegistrationRepository`; nothing else in the
//! workspace talks to Postgres directly.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::DbError;

pub type DbPool = PgPool;

/// Open a pool against `database_url` holding at most `max_connections`.
///
/// Connection failures surface as [`DbError::Sqlx`]; the caller decides
/// whether that is fatal.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, DbError> {
    info!(max_connections, "opening course registration database pool");
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Create the `course` and `course_registry` tables if they are missing.
///
/// The SQL lives in the workspace `migrations/` directory and is compiled
/// into the binary.
pub async fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    info!("applying course registration schema");
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}
