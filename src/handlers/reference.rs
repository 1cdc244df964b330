use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use common::{Course, Subject};
use tracing::{debug, info, instrument, trace};

use super::upstream_failure;
use crate::schemas::{AppState, CoursesQuery, ErrorResponse};

/// List all subjects
#[utoipa::path(
    get,
    path = "/api/v1/subjects",
    tag = "reference",
    responses(
        (status = 200, description = "Subjects retrieved successfully", body = Vec<Subject>),
        (status = 502, description = "Prediction backend unavailable", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_subjects(
    State(state): State<AppState>,
) -> Result<Json<Vec<Subject>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_subjects function");

    match state.upstream.list_subjects().await {
        Ok(subjects) => {
            info!("Forwarding {} subjects", subjects.len());
            Ok(Json(subjects))
        }
        Err(e) => Err(upstream_failure("GET /subjects", e)),
    }
}

/// List the courses of one subject
#[utoipa::path(
    get,
    path = "/api/v1/subjects/courses",
    tag = "reference",
    params(CoursesQuery),
    responses(
        (status = 200, description = "Courses retrieved successfully", body = Vec<Course>),
        (status = 400, description = "Missing subject code"),
        (status = 502, description = "Prediction backend unavailable", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_courses(
    Valid(Query(query)): Valid<Query<CoursesQuery>>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Course>>, (StatusCode, Json<ErrorResponse>)> {
    debug!("Fetching courses for subject: {}", query.subject);

    match state.upstream.list_courses(&query.subject).await {
        Ok(courses) => {
            info!("Forwarding {} courses for {}", courses.len(), query.subject);
            Ok(Json(courses))
        }
        Err(e) => Err(upstream_failure("GET /subjects/courses", e)),
    }
}
