//! Course catalog queries.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{DbError, models::CourseRow};
use super::CourseRepository;

/// Return every course in the catalog.
pub async fn list_courses(pool: &PgPool) -> Result<Vec<CourseRow>, DbError> {
    let rows = sqlx::query_as::<_, CourseRow>(
        r#"SELECT course_id, course_name, trainer, duration_in_weeks FROM course"#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// [`CourseRepository`] backed by Postgres.
#[derive(Debug, Clone)]
pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn list_courses(&self) -> Result<Vec<CourseRow>, DbError> {
        list_courses(&self.pool).await
    }
}
