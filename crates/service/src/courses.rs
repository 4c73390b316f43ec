//! Course catalog and enrollment operations.
//!
//! `CourseService` holds its two repositories behind trait objects so the
//! binary can wire Postgres in and tests can wire the in-memory store in.

use std::sync::Arc;

use tracing::{info, instrument};

use db::{CourseRegistryRow, CourseRepository, CourseRow, NewRegistration, RegistrationRepository};

use crate::ServiceError;

pub struct CourseService {
    courses: Arc<dyn CourseRepository>,
    registrations: Arc<dyn RegistrationRepository>,
}

impl CourseService {
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        registrations: Arc<dyn RegistrationRepository>,
    ) -> Self {
        Self { courses, registrations }
    }

    /// Every course in the catalog, in store order.
    #[instrument(skip(self))]
    pub async fn list_available_courses(&self) -> Result<Vec<CourseRow>, ServiceError> {
        Ok(self.courses.list_courses().await?)
    }

    /// Every enrollment record, unordered.
    #[instrument(skip(self))]
    pub async fn list_enrollments(&self) -> Result<Vec<CourseRegistryRow>, ServiceError> {
        Ok(self.registrations.list_registrations().await?)
    }

    /// Record one enrollment and return the confirmation shown to the student.
    ///
    /// Inputs are stored as given. Duplicate enrollments and course names
    /// missing from the catalog are accepted.
    ///
    /// # Errors
    /// Returns [`ServiceError::Storage`] if the insert fails; nothing is
    /// recorded in that case.
    #[instrument(skip(self, email_id))]
    pub async fn enroll(
        &self,
        name: &str,
        email_id: &str,
        course_name: &str,
    ) -> Result<String, ServiceError> {
        let row = self
            .registrations
            .save_registration(NewRegistration::new(name, email_id, course_name))
            .await?;

        info!("enrollment {} recorded for course '{}'", row.id, row.course_name);

        Ok(confirmation_message(name))
    }
}

/// Text returned to the caller after a successful enrollment.
pub fn confirmation_message(name: &str) -> String {
    format!("Congratulation! {name} course enrolled successfully")
}
