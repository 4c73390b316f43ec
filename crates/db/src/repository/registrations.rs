//! Enrollment (`course_registry`) queries.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    DbError,
    models::{CourseRegistryRow, NewRegistration},
};
use super::RegistrationRepository;

/// Insert a new enrollment. The id comes from the table's sequence.
pub async fn create_registration(
    pool: &PgPool,
    registration: &NewRegistration,
) -> Result<CourseRegistryRow, DbError> {
    let row = sqlx::query_as::<_, CourseRegistryRow>(
        r#"
        INSERT INTO course_registry (name, email_id, course_name)
        VALUES ($1, $2, $3)
        RETURNING id, name, email_id, course_name
        "#,
    )
    .bind(&registration.name)
    .bind(&registration.email_id)
    .bind(&registration.course_name)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Return every enrollment row.
pub async fn list_registrations(pool: &PgPool) -> Result<Vec<CourseRegistryRow>, DbError> {
    let rows = sqlx::query_as::<_, CourseRegistryRow>(
        r#"SELECT id, name, email_id, course_name FROM course_registry"#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// [`RegistrationRepository`] backed by Postgres.
#[derive(Debug, Clone)]
pub struct PgRegistrationRepository {
    pool: PgPool,
}

impl PgRegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationRepository for PgRegistrationRepository {
    async fn list_registrations(&self) -> Result<Vec<CourseRegistryRow>, DbError> {
        list_registrations(&self.pool).await
    }

    async fn save_registration(
        &self,
        registration: NewRegistration,
    ) -> Result<CourseRegistryRow, DbError> {
        create_registration(&self.pool, &registration).await
    }
}
