//! Everything a renderer needs to draw the page, derived from [`PredictorForm`].

use common::{Field, HOW_WE_PREDICT_ROUTE};
use std::collections::BTreeMap;

use crate::form::PredictorForm;

pub const TITLE: &str = "Grade Predictor";
pub const DESCRIPTION: &str =
    "Enter your course details to get a predicted grade based on historical data.";

pub const SUBJECT_LABEL: &str = "Subject";
pub const SUBJECT_DESCRIPTION: &str = "Choose the main subject area";
pub const SUBJECT_PLACEHOLDER: &str = "Select subject...";
pub const SUBJECT_SEARCH_PLACEHOLDER: &str = "Search subjects...";
pub const SUBJECT_EMPTY: &str = "No subject found.";
pub const SUBJECTS_LOADING: &str = "Loading subjects...";

pub const COURSE_LABEL: &str = "Course";
pub const COURSE_DESCRIPTION: &str = "Select the specific course";
pub const COURSE_NEEDS_SUBJECT: &str = "Select a subject first";
pub const COURSE_LOADING: &str = "Loading courses...";
pub const COURSE_PLACEHOLDER: &str = "Select course...";
pub const COURSE_SEARCH_PLACEHOLDER: &str = "Search courses...";
pub const COURSE_EMPTY: &str = "No course found.";

pub const YEAR_LABEL: &str = "Prediction Year";
pub const YEAR_DESCRIPTION: &str = "Select the year you want to predict";
pub const YEAR_PLACEHOLDER: &str = "Select year to predict";

pub const DISCLAIMER_TITLE: &str = "Important Disclaimer";
pub const DISCLAIMER_TEXT: &str =
    "Results should be taken as rough estimates only and may not accurately reflect future performance.";

pub const SUBMIT_LABEL: &str = "Predict Grade";
pub const SUBMIT_PENDING_LABEL: &str = "Predicting...";

pub const RESULT_HEADING: &str = "Prediction Results";
pub const LEARN_MORE_LABEL: &str = "Learn how we calculate this";

/// Rendered prediction, present only after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub grade_line: String,
    pub confidence_line: String,
    pub learn_more_label: &'static str,
    pub learn_more_href: &'static str,
}

/// Snapshot of what the page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Blocking error; when set the form is not shown at all
    pub subjects_error: Option<String>,
    /// The form stays usable while subjects load; the picker is just empty
    pub subjects_loading: bool,
    pub subject_text: String,
    /// Shown by the subject picker when no option matches
    pub subject_empty_text: &'static str,
    pub course_text: String,
    pub course_enabled: bool,
    /// Inline alert beside the course field
    pub courses_error: Option<String>,
    pub year_options: Vec<String>,
    /// `None` shows [`YEAR_PLACEHOLDER`]
    pub year_value: Option<String>,
    pub field_errors: BTreeMap<Field, String>,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub pending: bool,
    pub submit_error: Option<String>,
    pub result: Option<ResultView>,
}

impl PredictorForm {
    /// Derives the current page contents.
    pub fn view(&self) -> PageView {
        let selection = self.selection();

        let subject_text = self
            .subjects()
            .data()
            .and_then(|subjects| {
                subjects
                    .iter()
                    .find(|s| !selection.subject.is_empty() && s.subject_code == selection.subject)
            })
            .map(|s| s.subject_code.clone())
            .unwrap_or_else(|| SUBJECT_PLACEHOLDER.to_string());

        let course_text = if selection.subject.is_empty() {
            COURSE_NEEDS_SUBJECT.to_string()
        } else {
            match self.current_courses() {
                None => COURSE_LOADING.to_string(),
                Some(courses) => courses
                    .iter()
                    .find(|c| !selection.course.is_empty() && c.course_number == selection.course)
                    .map(|c| c.course_number.clone())
                    .unwrap_or_else(|| COURSE_PLACEHOLDER.to_string()),
            }
        };

        let courses_error = if selection.subject.is_empty() {
            None
        } else {
            self.courses().error().map(str::to_string)
        };

        PageView {
            subjects_error: self.subjects().error().map(str::to_string),
            subjects_loading: self.subjects().is_loading(),
            subject_text,
            subject_empty_text: if self.subjects().is_loading() {
                SUBJECTS_LOADING
            } else {
                SUBJECT_EMPTY
            },
            course_text,
            course_enabled: self.course_enabled(),
            courses_error,
            year_options: self.years().as_slice().to_vec(),
            year_value: (!selection.year.is_empty()).then(|| selection.year.clone()),
            field_errors: self.field_errors().clone(),
            submit_enabled: self.can_submit(),
            submit_label: if self.is_pending() { SUBMIT_PENDING_LABEL } else { SUBMIT_LABEL },
            pending: self.is_pending(),
            submit_error: self.submit_error().map(str::to_string),
            result: self.prediction().map(|prediction| ResultView {
                grade_line: prediction.grade_line(),
                confidence_line: prediction.confidence_line(),
                learn_more_label: LEARN_MORE_LABEL,
                learn_more_href: HOW_WE_PREDICT_ROUTE,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::years::YearOptions;
    use crate::{COURSES_LOAD_ERROR, SUBJECTS_LOAD_ERROR};
    use common::{Course, GradeValue, Prediction, RecordId, Subject};

    fn form() -> PredictorForm {
        PredictorForm::new(YearOptions::starting_at(2025))
    }

    fn with_subjects() -> PredictorForm {
        let mut form = form();
        form.begin_subjects_load();
        form.finish_subjects_load::<String>(Ok(vec![Subject {
            id: RecordId::Number(1),
            subject_code: "CS".to_string(),
        }]));
        form
    }

    #[test]
    fn test_initial_view() {
        let mut form = form();
        form.begin_subjects_load();
        let view = form.view();

        assert!(view.subjects_loading);
        assert_eq!(view.subjects_error, None);
        assert_eq!(view.subject_text, SUBJECT_PLACEHOLDER);
        assert_eq!(view.subject_empty_text, SUBJECTS_LOADING);
        assert!(form.subject_options("").is_empty());
        assert_eq!(view.course_text, COURSE_NEEDS_SUBJECT);
        assert!(!view.course_enabled);
        assert_eq!(view.year_options, vec!["2025", "2026", "2027"]);
        assert_eq!(view.year_value, None);
        assert!(!view.submit_enabled);
        assert_eq!(view.submit_label, SUBMIT_LABEL);
        assert_eq!(view.result, None);
    }

    #[test]
    fn test_fields_usable_while_subjects_load() {
        let mut form = form();
        form.begin_subjects_load();
        form.select_year("2026").unwrap();

        let view = form.view();
        assert!(view.subjects_loading);
        assert_eq!(view.year_value.as_deref(), Some("2026"));
        assert!(!view.submit_enabled);

        form.finish_subjects_load::<String>(Ok(vec![Subject {
            id: RecordId::Number(1),
            subject_code: "CS".to_string(),
        }]));
        let view = form.view();
        assert!(!view.subjects_loading);
        assert_eq!(view.subject_empty_text, SUBJECT_EMPTY);
        assert_eq!(view.year_value.as_deref(), Some("2026"));
        assert_eq!(form.subject_options("").len(), 1);
    }

    #[test]
    fn test_subjects_failure_is_blocking() {
        let mut form = form();
        form.begin_subjects_load();
        form.finish_subjects_load(Err("HTTP error: 500"));

        assert_eq!(form.view().subjects_error.as_deref(), Some(SUBJECTS_LOAD_ERROR));
    }

    #[test]
    fn test_course_text_follows_loading() {
        let mut form = with_subjects();
        let request = form.select_subject("CS").unwrap().unwrap();

        let view = form.view();
        assert_eq!(view.subject_text, "CS");
        assert_eq!(view.course_text, COURSE_LOADING);

        form.finish_courses_load::<String>(
            &request,
            Ok(vec![Course {
                id: RecordId::Number(10),
                course_number: "101".to_string(),
                title: Some("Intro".to_string()),
            }]),
        );
        assert_eq!(form.view().course_text, COURSE_PLACEHOLDER);

        form.select_course("101").unwrap();
        assert_eq!(form.view().course_text, "101");
    }

    #[test]
    fn test_courses_error_shown_inline() {
        let mut form = with_subjects();
        let request = form.select_subject("CS").unwrap().unwrap();
        form.finish_courses_load(&request, Err("connection reset"));

        let view = form.view();
        assert_eq!(view.courses_error.as_deref(), Some(COURSES_LOAD_ERROR));
        assert_eq!(view.subjects_error, None);
        assert!(!view.course_enabled);
    }

    #[test]
    fn test_pending_and_result() {
        let mut form = with_subjects();
        let request = form.select_subject("CS").unwrap().unwrap();
        form.finish_courses_load::<String>(
            &request,
            Ok(vec![Course {
                id: RecordId::Number(10),
                course_number: "101".to_string(),
                title: None,
            }]),
        );
        form.select_course("101").unwrap();
        form.select_year("2025").unwrap();
        assert!(form.view().submit_enabled);

        form.begin_submit().unwrap();
        let view = form.view();
        assert!(view.pending);
        assert!(!view.submit_enabled);
        assert_eq!(view.submit_label, SUBMIT_PENDING_LABEL);

        form.finish_submit::<String>(Ok(Prediction {
            predicted_grade: GradeValue::Text("3.7".to_string()),
            confidence: 82.0,
        }));
        let result = form.view().result.expect("prediction shown");
        assert_eq!(result.grade_line, "Predicted GPA: 3.7");
        assert_eq!(result.confidence_line, "Confidence: 82%");
        assert_eq!(result.learn_more_label, "Learn how we calculate this");
        assert_eq!(result.learn_more_href, "/how-we-predict-grades");
    }
}
