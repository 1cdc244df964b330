use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

/// The form's working state and the body of a prediction request.
///
/// All three fields must be non-empty before the selection may be submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate, PartialEq, Eq)]
pub struct Selection {
    /// Subject code, e.g. "CS"
    #[validate(length(min = 1, message = "Please select a subject"))]
    #[serde(default)]
    pub subject: String,
    /// Course number within the subject, e.g. "101"
    #[validate(length(min = 1, message = "Please select a course"))]
    #[serde(default)]
    pub course: String,
    /// Target year, e.g. "2026"
    #[validate(length(min = 1, message = "Please select a year"))]
    #[serde(default)]
    pub year: String,
}

/// One of the three form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Subject,
    Course,
    Year,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Subject, Field::Course, Field::Year];

    /// Name of the field as it appears in JSON.
    pub fn name(self) -> &'static str {
        match self {
            Field::Subject => "subject",
            Field::Course => "course",
            Field::Year => "year",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Selection {
    pub fn new(
        subject: impl Into<String>,
        course: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            course: course.into(),
            year: year.into(),
        }
    }

    /// Runs the validation rules and collects one message per failing field.
    ///
    /// An empty map means the selection may be submitted.
    pub fn field_errors(&self) -> BTreeMap<Field, String> {
        let mut messages = BTreeMap::new();
        let Err(errors) = self.validate() else {
            return messages;
        };

        for (name, field_errors) in errors.field_errors() {
            let name: &str = &name;
            let Some(field) = Field::from_name(name) else {
                continue;
            };
            if let Some(message) = field_errors.iter().find_map(|e| e.message.as_ref()) {
                messages.insert(field, message.to_string());
            }
        }

        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_reports_every_field() {
        let errors = Selection::default().field_errors();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors[&Field::Subject], "Please select a subject");
        assert_eq!(errors[&Field::Course], "Please select a course");
        assert_eq!(errors[&Field::Year], "Please select a year");
    }

    #[test]
    fn test_complete_selection_is_valid() {
        let selection = Selection::new("CS", "101", "2025");

        assert!(selection.field_errors().is_empty());
    }

    #[test]
    fn test_missing_course_only() {
        let selection = Selection::new("CS", "", "2025");
        let errors = selection.field_errors();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::Course], "Please select a course");
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let json = serde_json::to_value(Selection::new("CS", "101", "2025")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"subject": "CS", "course": "101", "year": "2025"})
        );
    }

    #[test]
    fn test_missing_json_fields_default_to_empty() {
        let selection: Selection = serde_json::from_str(r#"{"subject": "CS"}"#).unwrap();
        assert_eq!(selection.course, "");
        assert_eq!(selection.field_errors().len(), 2);
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("grade"), None);
    }
}
