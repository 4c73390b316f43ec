//! `InMemoryStore` — a test double for both repository traits.
//!
//! Useful in service and API tests where a live Postgres is either
//! unavailable or irrelevant.  Ids are issued from 1 upwards, matching a
//! fresh `SERIAL` column.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    DbError,
    models::{CourseRegistryRow, CourseRow, NewRegistration},
};
use super::{CourseRepository, RegistrationRepository};

/// Behaviour injected into `InMemoryStore` at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBehaviour {
    /// Serve reads and writes from memory.
    Available,
    /// Fail every call as if the pool could not hand out a connection.
    Unavailable,
}

#[derive(Debug, Default)]
struct Tables {
    courses: Vec<CourseRow>,
    registrations: Vec<CourseRegistryRow>,
    next_registration_id: i32,
}

/// Shared in-memory tables. Clones see the same data.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
    behaviour: StoreBehaviour,
}

impl InMemoryStore {
    /// An empty, working store.
    pub fn new() -> Self {
        Self::with_courses(Vec::new())
    }

    /// A working store whose catalog is pre-populated with `courses`.
    pub fn with_courses(courses: Vec<CourseRow>) -> Self {
        Self {
            tables: Arc::new(Mutex::new(Tables {
                courses,
                registrations: Vec::new(),
                next_registration_id: 1,
            })),
            behaviour: StoreBehaviour::Available,
        }
    }

    /// A store that fails every operation.
    pub fn unavailable() -> Self {
        Self {
            behaviour: StoreBehaviour::Unavailable,
            ..Self::new()
        }
    }

    /// Number of enrollment rows currently held.
    pub async fn registration_count(&self) -> usize {
        self.tables.lock().await.registrations.len()
    }

    fn check_available(&self) -> Result<(), DbError> {
        match self.behaviour {
            StoreBehaviour::Available => Ok(()),
            StoreBehaviour::Unavailable => Err(DbError::Sqlx(sqlx::Error::PoolTimedOut)),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CourseRepository for InMemoryStore {
    async fn list_courses(&self) -> Result<Vec<CourseRow>, DbError> {
        self.check_available()?;
        Ok(self.tables.lock().await.courses.clone())
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryStore {
    async fn list_registrations(&self) -> Result<Vec<CourseRegistryRow>, DbError> {
        self.check_available()?;
        Ok(self.tables.lock().await.registrations.clone())
    }

    async fn save_registration(
        &self,
        registration: NewRegistration,
    ) -> Result<CourseRegistryRow, DbError> {
        self.check_available()?;

        let mut tables = self.tables.lock().await;
        let row = CourseRegistryRow {
            id: tables.next_registration_id,
            name: registration.name,
            email_id: registration.email_id,
            course_name: registration.course_name,
        };
        tables.next_registration_id += 1;
        tables.registrations.push(row.clone());

        Ok(row)
    }
}
