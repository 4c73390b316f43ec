//! Row structs that map 1-to-1 onto database tables.
//!
//! They serialise with camelCase keys, which is the JSON shape the HTTP API
//! hands to clients, so the api crate returns them as-is.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// course
// ---------------------------------------------------------------------------

/// A catalog entry students may enroll in.
///
/// Read-only from this service's point of view; rows are loaded out of band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CourseRow {
    pub course_id: i32,
    pub course_name: String,
    pub trainer: String,
    pub duration_in_weeks: i32,
}

impl CourseRow {
    pub fn new(
        course_id: i32,
        course_name: impl Into<String>,
        trainer: impl Into<String>,
        duration_in_weeks: i32,
    ) -> Self {
        Self {
            course_id,
            course_name: course_name.into(),
            trainer: trainer.into(),
            duration_in_weeks,
        }
    }
}

// ---------------------------------------------------------------------------
// course_registry
// ---------------------------------------------------------------------------

/// A persisted enrollment: one student enrolled in one course.
///
/// `course_name` is free text. Nothing ties it to a row in `course`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CourseRegistryRow {
    /// Assigned by the store at insert time.
    pub id: i32,
    pub name: String,
    pub email_id: String,
    pub course_name: String,
}

/// Insert payload for `course_registry`. The id is left to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegistration {
    pub name: String,
    pub email_id: String,
    pub course_name: String,
}

impl NewRegistration {
    pub fn new(
        name: impl Into<String>,
        email_id: impl Into<String>,
        course_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email_id: email_id.into(),
            course_name: course_name.into(),
        }
    }
}
