use axum::{
    async_trait,
    extract::{Form, FromRequest, FromRequestParts, Query, Request, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::AppState;
use crate::ApiError;

/// Fields of `POST /courses/enroll`.
///
/// All three are required; values are otherwise taken as-is.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollParams {
    pub name: String,
    pub email_id: String,
    pub course_name: String,
}

/// Reads [`EnrollParams`] from the query string, or failing that from an
/// `application/x-www-form-urlencoded` body.
///
/// When neither carries all three fields the body's rejection is returned,
/// which is always a 4xx.
#[derive(Debug)]
pub struct EnrollInput(pub EnrollParams);

#[async_trait]
impl<S> FromRequest<S> for EnrollInput
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        if let Ok(Query(params)) = Query::<EnrollParams>::from_request_parts(&mut parts, state).await {
            return Ok(Self(params));
        }

        let Form(params) = Form::<EnrollParams>::from_request(Request::from_parts(parts, body), state)
            .await
            .map_err(IntoResponse::into_response)?;
        Ok(Self(params))
    }
}

/// GET /courses/enrolled - every enrollment record
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<db::CourseRegistryRow>>, ApiError> {
    let enrolled = state.service.list_enrollments().await?;
    Ok(Json(enrolled))
}

/// POST /courses/enroll - record one enrollment, answer with plain text
pub async fn enroll(
    State(state): State<AppState>,
    EnrollInput(params): EnrollInput,
) -> Result<String, ApiError> {
    let message = state
        .service
        .enroll(&params.name, &params.email_id, &params.course_name)
        .await?;
    Ok(message)
}
