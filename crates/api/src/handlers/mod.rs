//! Route handlers and shared state.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use service::CourseService;

pub mod courses;
pub mod enrollments;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CourseService>,
}

impl AppState {
    pub fn new(service: CourseService) -> Self {
        Self { service: Arc::new(service) }
    }
}

/// Course and enrollment routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(courses::list))
        .route("/courses/enrolled", get(enrollments::list))
        .route("/courses/enroll", post(enrollments::enroll))
}
