use common::{Course, Field, Prediction, Selection, Subject};
use std::collections::BTreeMap;
use std::fmt::Display;
use tracing::{debug, info, instrument, warn};

use crate::error::{FormError, Result};
use crate::loader::{CoursesRequest, LoadOutcome, LoadState};
use crate::search::{filter_options, OptionItem};
use crate::validation::ValidationReport;
use crate::years::YearOptions;
use crate::{COURSES_LOAD_ERROR, SUBJECTS_LOAD_ERROR, SUBMIT_ERROR};

/// State of one grade predictor page, from mount to unmount.
///
/// Invariants:
/// - `selection.course`, when set, is a course of `selection.subject`
/// - `courses` belongs to `courses_key`; a course list for any other subject
///   is never stored
/// - at most one submission is pending
#[derive(Debug, Clone, PartialEq)]
pub struct PredictorForm {
    years: YearOptions,
    subjects: LoadState<Vec<Subject>>,
    courses: LoadState<Vec<Course>>,
    courses_key: Option<String>,
    courses_generation: u64,
    selection: Selection,
    field_errors: BTreeMap<Field, String>,
    pending: bool,
    prediction: Option<Prediction>,
    submit_error: Option<String>,
}

impl Default for PredictorForm {
    fn default() -> Self {
        Self::new(YearOptions::from_clock())
    }
}

impl PredictorForm {
    /// An empty form offering the given years.
    pub fn new(years: YearOptions) -> Self {
        Self {
            years,
            subjects: LoadState::NotStarted,
            courses: LoadState::NotStarted,
            courses_key: None,
            courses_generation: 0,
            selection: Selection::default(),
            field_errors: BTreeMap::new(),
            pending: false,
            prediction: None,
            submit_error: None,
        }
    }

    // ---------------------------------------------------------------------
    // Reference data
    // ---------------------------------------------------------------------

    /// Marks the subject list as loading.
    ///
    /// Returns `false` when the list was already requested; subjects are
    /// fetched once per page.
    pub fn begin_subjects_load(&mut self) -> bool {
        if !matches!(self.subjects, LoadState::NotStarted) {
            debug!("Subjects already requested, skipping fetch");
            return false;
        }
        self.subjects = LoadState::Loading;
        true
    }

    /// Stores the outcome of the subject list fetch.
    pub fn finish_subjects_load<E: Display>(
        &mut self,
        result: std::result::Result<Vec<Subject>, E>,
    ) {
        self.subjects = match result {
            Ok(subjects) => {
                info!("Loaded {} subjects", subjects.len());
                LoadState::Loaded(subjects)
            }
            Err(e) => {
                warn!("Failed to load subjects: {}", e);
                LoadState::Failed(SUBJECTS_LOAD_ERROR.to_string())
            }
        };
    }

    /// Stores the outcome of a course list fetch if it is still wanted.
    ///
    /// The response is dropped when a newer course fetch was issued since,
    /// or when the selected subject no longer matches the subject the
    /// request was issued for.
    #[instrument(skip(self, result), fields(subject = %request.subject))]
    pub fn finish_courses_load<E: Display>(
        &mut self,
        request: &CoursesRequest,
        result: std::result::Result<Vec<Course>, E>,
    ) -> LoadOutcome {
        if request.generation != self.courses_generation
            || self.selection.subject != request.subject
            || self.courses_key.as_deref() != Some(request.subject.as_str())
        {
            debug!(
                current = %self.selection.subject,
                generation = request.generation,
                latest = self.courses_generation,
                "Discarding stale course list"
            );
            return LoadOutcome::Stale;
        }

        self.courses = match result {
            Ok(courses) => {
                info!("Loaded {} courses", courses.len());
                LoadState::Loaded(courses)
            }
            Err(e) => {
                warn!("Failed to load courses: {}", e);
                LoadState::Failed(COURSES_LOAD_ERROR.to_string())
            }
        };
        LoadOutcome::Applied
    }

    // ---------------------------------------------------------------------
    // Field updates
    // ---------------------------------------------------------------------

    /// Picks a subject and clears the course.
    ///
    /// Returns the course fetch to perform, or `None` when the courses of
    /// this subject were already requested.
    #[instrument(skip(self))]
    pub fn select_subject(&mut self, code: &str) -> Result<Option<CoursesRequest>> {
        let Some(subjects) = self.subjects.data() else {
            return Err(FormError::SubjectsUnavailable);
        };
        if code.is_empty() || !subjects.iter().any(|s| s.subject_code == code) {
            return Err(FormError::UnknownSubject(code.to_string()));
        }

        self.selection.subject = code.to_string();
        self.selection.course.clear();
        self.field_errors.remove(&Field::Subject);

        if self.courses_key.as_deref() == Some(code) {
            debug!("Courses for {} already requested", code);
            return Ok(None);
        }

        self.courses_key = Some(code.to_string());
        self.courses_generation += 1;
        self.courses = LoadState::Loading;
        Ok(Some(CoursesRequest {
            subject: code.to_string(),
            generation: self.courses_generation,
        }))
    }

    /// Picks a course of the current subject.
    pub fn select_course(&mut self, number: &str) -> Result<()> {
        let courses = self.current_courses().ok_or(FormError::CoursesUnavailable)?;
        if !courses.iter().any(|c| c.course_number == number) {
            return Err(FormError::UnknownCourse(number.to_string()));
        }

        self.selection.course = number.to_string();
        self.field_errors.remove(&Field::Course);
        Ok(())
    }

    /// Picks one of the offered years.
    pub fn select_year(&mut self, year: &str) -> Result<()> {
        if !self.years.contains(year) {
            return Err(FormError::UnknownYear(year.to_string()));
        }

        self.selection.year = year.to_string();
        self.field_errors.remove(&Field::Year);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Submission
    // ---------------------------------------------------------------------

    pub fn validate(&self) -> ValidationReport {
        ValidationReport::for_selection(&self.selection)
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.pending && self.validate().valid
    }

    /// Starts a submission and returns the snapshot to send.
    ///
    /// On success the previous prediction and error are cleared and the
    /// form is pending until [`Self::finish_submit`]. Invalid selections
    /// record their field messages and are not submitted.
    pub fn begin_submit(&mut self) -> Result<Selection> {
        if self.pending {
            return Err(FormError::SubmissionPending);
        }

        let report = self.validate();
        if !report.valid {
            debug!("Submission blocked by validation: {:?}", report.field_errors);
            self.field_errors = report.field_errors.clone();
            return Err(FormError::Invalid(report));
        }

        self.field_errors.clear();
        self.prediction = None;
        self.submit_error = None;
        self.pending = true;
        info!(
            subject = %self.selection.subject,
            course = %self.selection.course,
            year = %self.selection.year,
            "Submitting prediction request"
        );
        Ok(self.selection.clone())
    }

    /// Stores the submission outcome and clears the pending flag.
    ///
    /// Failures are reduced to [`SUBMIT_ERROR`]; the cause is only logged.
    pub fn finish_submit<E: Display>(&mut self, result: std::result::Result<Prediction, E>) {
        self.pending = false;
        match result {
            Ok(prediction) => {
                info!("Received prediction: {}", prediction.predicted_grade);
                self.prediction = Some(prediction);
            }
            Err(e) => {
                warn!("Prediction request failed: {}", e);
                self.submit_error = Some(SUBMIT_ERROR.to_string());
            }
        }
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn years(&self) -> &YearOptions {
        &self.years
    }

    pub fn subjects(&self) -> &LoadState<Vec<Subject>> {
        &self.subjects
    }

    pub fn courses(&self) -> &LoadState<Vec<Course>> {
        &self.courses
    }

    /// Loaded courses of the currently selected subject, if any.
    pub fn current_courses(&self) -> Option<&[Course]> {
        if self.selection.subject.is_empty()
            || self.courses_key.as_deref() != Some(self.selection.subject.as_str())
        {
            return None;
        }
        self.courses.data().map(Vec::as_slice)
    }

    pub fn field_errors(&self) -> &BTreeMap<Field, String> {
        &self.field_errors
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        self.prediction.as_ref()
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Whether the course picker can be opened.
    pub fn course_enabled(&self) -> bool {
        self.current_courses().is_some()
    }

    /// Subject picker entries matching `query`.
    pub fn subject_options(&self, query: &str) -> Vec<OptionItem> {
        let options = self
            .subjects
            .data()
            .map(|subjects| {
                subjects
                    .iter()
                    .map(|subject| OptionItem {
                        value: subject.subject_code.clone(),
                        label: subject.subject_code.clone(),
                        selected: subject.subject_code == self.selection.subject,
                    })
                    .collect()
            })
            .unwrap_or_default();
        filter_options(options, query)
    }

    /// Course picker entries matching `query`.
    pub fn course_options(&self, query: &str) -> Vec<OptionItem> {
        let options = self
            .current_courses()
            .map(|courses| {
                courses
                    .iter()
                    .map(|course| OptionItem {
                        value: course.course_number.clone(),
                        label: course.label(),
                        selected: course.course_number == self.selection.course,
                    })
                    .collect()
            })
            .unwrap_or_default();
        filter_options(options, query)
    }
}
