use std::rc::Rc;

use common::{Course, Prediction, Selection, Subject};
use form::{CoursesRequest, FormError, LoadOutcome, PredictorForm};
use yew::prelude::*;

/// A prediction request waiting to be sent.
///
/// `id` changes on every accepted submission so an effect keyed on it fires
/// even when the same selection is submitted twice.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub id: u64,
    pub selection: Selection,
}

/// Page state held by `use_reducer`.
///
/// Besides the form itself it records the latest course fetch and
/// submission to perform; effects keyed on those perform the I/O and report
/// back through [`PredictorAction`].
#[derive(Clone, Debug, PartialEq)]
pub struct PredictorState {
    pub form: PredictorForm,
    pub courses_request: Option<CoursesRequest>,
    pub submission: Option<Submission>,
    next_submission_id: u64,
}

impl Default for PredictorState {
    fn default() -> Self {
        let mut form = PredictorForm::default();
        form.begin_subjects_load();
        Self {
            form,
            courses_request: None,
            submission: None,
            next_submission_id: 1,
        }
    }
}

pub enum PredictorAction {
    SubjectsLoaded(Result<Vec<Subject>, String>),
    SelectSubject(String),
    CoursesLoaded(CoursesRequest, Result<Vec<Course>, String>),
    SelectCourse(String),
    SelectYear(String),
    Submit,
    PredictionFinished(Result<Prediction, String>),
}

impl Reducible for PredictorState {
    type Action = PredictorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            PredictorAction::SubjectsLoaded(result) => {
                next.form.finish_subjects_load(result);
            }
            PredictorAction::SelectSubject(code) => match next.form.select_subject(&code) {
                Ok(Some(request)) => {
                    log::debug!("Subject {} selected, loading courses", code);
                    next.courses_request = Some(request);
                }
                Ok(None) => log::debug!("Subject {} reselected", code),
                Err(e) => log::warn!("Subject selection rejected: {}", e),
            },
            PredictorAction::CoursesLoaded(request, result) => {
                if next.form.finish_courses_load(&request, result) == LoadOutcome::Stale {
                    log::debug!("Ignored stale courses for {}", request.subject);
                }
            }
            PredictorAction::SelectCourse(number) => {
                if let Err(e) = next.form.select_course(&number) {
                    log::warn!("Course selection rejected: {}", e);
                }
            }
            PredictorAction::SelectYear(year) => {
                if let Err(e) = next.form.select_year(&year) {
                    log::warn!("Year selection rejected: {}", e);
                }
            }
            PredictorAction::Submit => match next.form.begin_submit() {
                Ok(selection) => {
                    next.submission = Some(Submission {
                        id: next.next_submission_id,
                        selection,
                    });
                    next.next_submission_id += 1;
                }
                Err(FormError::Invalid(report)) => {
                    log::debug!("Submission blocked: {:?}", report.field_errors);
                }
                Err(e) => log::warn!("Submission rejected: {}", e),
            },
            PredictorAction::PredictionFinished(result) => {
                next.form.finish_submit(result);
            }
        }

        next.into()
    }
}
