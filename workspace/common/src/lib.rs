//! Common transport-layer types shared between the gateway and the frontend.
//! These structs mirror the prediction backend's request/response payloads
//! so both sides deserialize API responses without duplicating shapes.

mod prediction;
mod reference;
mod selection;

pub use prediction::{GradeValue, Prediction};
pub use reference::{Course, RecordId, Subject};
pub use selection::{Field, Selection};

/// Path prefix shared by every backend endpoint.
pub const API_PREFIX: &str = "/api/v1";

/// Endpoint listing every subject.
pub const SUBJECTS_ENDPOINT: &str = "/subjects";

/// Endpoint listing the courses of one subject.
pub const COURSES_ENDPOINT: &str = "/subjects/courses";

/// Endpoint accepting a [`Selection`] and answering with a [`Prediction`].
pub const PREDICT_ENDPOINT: &str = "/predict";

/// Frontend route explaining how predictions are computed.
pub const HOW_WE_PREDICT_ROUTE: &str = "/how-we-predict-grades";

/// Relative endpoint (below [`API_PREFIX`]) for the courses of `subject_code`.
///
/// The code is percent-encoded so codes containing `&` or spaces survive the
/// query string intact.
pub fn courses_endpoint(subject_code: &str) -> String {
    format!(
        "{}?subject={}",
        COURSES_ENDPOINT,
        urlencoding::encode(subject_code)
    )
}

/// Error response returned by the gateway for failed calls.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, utoipa::ToSchema, PartialEq)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_courses_endpoint_plain_code() {
        assert_eq!(courses_endpoint("CS"), "/subjects/courses?subject=CS");
    }

    #[test]
    fn test_courses_endpoint_escapes_reserved_characters() {
        assert_eq!(
            courses_endpoint("A&B C"),
            "/subjects/courses?subject=A%26B%20C"
        );
    }
}
