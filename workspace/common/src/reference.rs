use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Backend record id, numeric or textual (e.g. a UUID).
///
/// Only the selectable keys identify records in the form; ids are carried
/// through as received.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Number(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId::Text(id.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(id) => write!(f, "{}", id),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

/// Top-level academic category (e.g. "CS").
///
/// The backend may send more fields than these; they are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Subject {
    pub id: RecordId,
    /// Selectable key shown to the user
    pub subject_code: String,
}

/// A specific offering within a subject, identified by its course number.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Course {
    pub id: RecordId,
    /// Selectable key shown to the user
    pub course_number: String,
    /// Optional display text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Course {
    /// Option label, e.g. `"101 - Intro"`, or just the number when untitled.
    pub fn label(&self) -> String {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => format!("{} - {}", self.course_number, title),
            _ => self.course_number.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_ignores_extra_fields() {
        let subject: Subject = serde_json::from_str(
            r#"{"id": 1, "subject_code": "CS", "name": "Computer Science"}"#,
        )
        .unwrap();

        assert_eq!(subject.id, RecordId::Number(1));
        assert_eq!(subject.subject_code, "CS");
    }

    #[test]
    fn test_course_title_is_optional() {
        let course: Course =
            serde_json::from_str(r#"{"id": 10, "course_number": "101"}"#).unwrap();
        assert_eq!(course.title, None);
        assert_eq!(course.label(), "101");
    }

    #[test]
    fn test_course_label_with_title() {
        let course: Course = serde_json::from_str(
            r#"{"id": 10, "course_number": "101", "title": "Intro", "credits": 4}"#,
        )
        .unwrap();
        assert_eq!(course.label(), "101 - Intro");
    }

    #[test]
    fn test_course_label_with_empty_title() {
        let course = Course {
            id: RecordId::Number(11),
            course_number: "102".to_string(),
            title: Some(String::new()),
        };
        assert_eq!(course.label(), "102");
    }

    #[test]
    fn test_textual_ids_are_accepted() {
        let subjects: Vec<Subject> = serde_json::from_str(
            r#"[{"id": "7f1c", "subject_code": "CS"}, {"id": 2, "subject_code": "MATH"}]"#,
        )
        .unwrap();

        assert_eq!(subjects[0].id, RecordId::from("7f1c"));
        assert_eq!(subjects[1].id, RecordId::Number(2));
        assert_eq!(subjects[0].id.to_string(), "7f1c");

        let course: Course =
            serde_json::from_str(r#"{"id": "c-10", "course_number": "101"}"#).unwrap();
        assert_eq!(course.id, RecordId::from("c-10"));
    }
}
