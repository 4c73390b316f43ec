//! `service` crate — the course-registration operations the HTTP layer calls.
//!
//! Pure delegation onto the repository traits from the `db` crate.

pub mod error;
pub mod courses;

pub use courses::CourseService;
pub use error::ServiceError;
