use axum::{extract::State, Json};

use super::AppState;
use crate::ApiError;

/// GET /courses - the full course catalog
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<db::CourseRow>>, ApiError> {
    let courses = state.service.list_available_courses().await?;
    Ok(Json(courses))
}
