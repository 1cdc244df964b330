use thiserror::Error;

use crate::validation::ValidationReport;

/// Rejected form interactions.
///
/// None of these leave the form in a modified state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    /// A subject was picked before the subject list finished loading
    #[error("Subjects are not available yet")]
    SubjectsUnavailable,

    /// The subject code is not in the loaded subject list
    #[error("Unknown subject: {0}")]
    UnknownSubject(String),

    /// A course was picked before the courses of the current subject loaded
    #[error("Courses are not available for the selected subject")]
    CoursesUnavailable,

    /// The course number is not offered by the current subject
    #[error("Unknown course: {0}")]
    UnknownCourse(String),

    /// The year is outside the offered prediction range
    #[error("Unknown year: {0}")]
    UnknownYear(String),

    /// Another submission is still in flight
    #[error("A prediction is already being requested")]
    SubmissionPending,

    /// Validation failed; nothing was submitted
    #[error("Selection is incomplete")]
    Invalid(ValidationReport),
}

/// Type alias for Result with FormError
pub type Result<T> = std::result::Result<T, FormError>;
