//! `db` crate — pure persistence layer.
//!
//! Provides a connection pool, typed row structs, the repository traits the
//! service layer depends on, and repository functions for both tables of the
//! course-registration schema.  No business logic lives here.

pub mod error;
pub mod pool;
pub mod repository;
pub mod models;

pub use pool::DbPool;
pub use error::DbError;
pub use models::{CourseRow, CourseRegistryRow, NewRegistration};
pub use repository::{CourseRepository, RegistrationRepository};
