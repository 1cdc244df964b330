use common::{Course, GradeValue, Prediction, RecordId, Selection, Subject};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, OpenApi, ToSchema};
use validator::Validate;

pub use common::ErrorResponse;

use crate::client::{ClientError, UpstreamClient};
use crate::config::AppConfig;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Gateway configuration
    pub config: AppConfig,
    /// Client for the prediction backend
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, ClientError> {
        let upstream = UpstreamClient::from_config(&config)?;
        Ok(Self { config, upstream })
    }
}

/// Query parameters for the course list endpoint
#[derive(Debug, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct CoursesQuery {
    /// Subject code whose courses are listed
    #[validate(length(min = 1, message = "Please select a subject"))]
    #[serde(default)]
    pub subject: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Prediction backend reachability
    pub upstream: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::reference::get_subjects,
        crate::handlers::reference::get_courses,
        crate::handlers::predict::predict,
    ),
    components(schemas(
        Subject,
        Course,
        RecordId,
        Selection,
        Prediction,
        GradeValue,
        ErrorResponse,
        HealthResponse,
    )),
    tags(
        (name = "health", description = "Gateway health"),
        (name = "reference", description = "Subjects and courses"),
        (name = "prediction", description = "Grade predictions"),
    ),
    info(
        title = "Grade Predictor API",
        description = "Gateway in front of the grade prediction backend",
    )
)]
pub struct ApiDoc;
