use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Grade as returned by the backend; either a preformatted string or a number.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(untagged)]
pub enum GradeValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for GradeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeValue::Text(text) => f.write_str(text),
            GradeValue::Number(value) => write!(f, "{}", value),
        }
    }
}

/// Model output estimating a grade with a confidence percentage.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Display value, e.g. a GPA
    pub predicted_grade: GradeValue,
    /// Confidence as a percentage
    pub confidence: f64,
}

impl Prediction {
    /// e.g. `"Predicted GPA: 3.7"`
    pub fn grade_line(&self) -> String {
        format!("Predicted GPA: {}", self.predicted_grade)
    }

    /// e.g. `"Confidence: 82%"`
    pub fn confidence_line(&self) -> String {
        format!("Confidence: {}%", self.confidence)
    }
}
