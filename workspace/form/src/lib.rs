//! Headless model of the grade predictor page.
//!
//! [`PredictorForm`] owns everything the page shows: the subject and course
//! lists, the three field values, the pending submission and its outcome.
//! It performs no I/O. A driver (the browser page, the CLI, a test) calls a
//! `begin_*` operation, performs the HTTP request it describes and hands the
//! outcome back through the matching `finish_*` operation.

pub mod error;
pub mod form;
pub mod loader;
pub mod search;
pub mod validation;
pub mod view;
pub mod years;

pub use error::{FormError, Result};
pub use form::PredictorForm;
pub use loader::{CoursesRequest, LoadOutcome, LoadState};
pub use search::{filter_options, OptionItem};
pub use validation::ValidationReport;
pub use view::{PageView, ResultView};
pub use years::YearOptions;

/// Shown in place of the form when the subject list cannot be loaded.
pub const SUBJECTS_LOAD_ERROR: &str = "Failed to load subjects. Please refresh the page.";

/// Shown beside the course field when the course list cannot be loaded.
pub const COURSES_LOAD_ERROR: &str = "Failed to load courses. Please try again.";

/// Shown for any failed submission; the underlying cause is only logged.
pub const SUBMIT_ERROR: &str = "Failed to get prediction. Please try again.";
