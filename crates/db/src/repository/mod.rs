//! Repository layer.
//!
//! Two levels live here:
//! - free functions, one per database operation, taking a `&DbPool` and
//!   returning `Result<T, DbError>` (pure SQL, no domain logic);
//! - the narrow [`CourseRepository`] / [`RegistrationRepository`] traits the
//!   service layer is written against, exposing only the operations it uses.

use async_trait::async_trait;

use crate::{
    DbError,
    models::{CourseRegistryRow, CourseRow, NewRegistration},
};

pub mod courses;
pub mod registrations;
pub mod memory;

pub use courses::PgCourseRepository;
pub use memory::InMemoryStore;
pub use registrations::PgRegistrationRepository;

/// Read access to the course catalog.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Every course row, in store order.
    async fn list_courses(&self) -> Result<Vec<CourseRow>, DbError>;
}

/// Read and append access to enrollment records.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Every enrollment row. No ordering guarantee.
    async fn list_registrations(&self) -> Result<Vec<CourseRegistryRow>, DbError>;

    /// Insert one enrollment and return it with its store-assigned id.
    async fn save_registration(
        &self,
        registration: NewRegistration,
    ) -> Result<CourseRegistryRow, DbError>;
}
