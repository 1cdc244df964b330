use common::{Course, Subject, SUBJECTS_ENDPOINT};
use crate::api_client;

/// Get all subjects
pub async fn get_subjects() -> Result<Vec<Subject>, String> {
    log::trace!("Fetching all subjects");
    let result = api_client::get::<Vec<Subject>>(SUBJECTS_ENDPOINT).await;
    match &result {
        Ok(subjects) => log::info!("Fetched {} subjects", subjects.len()),
        Err(e) => log::error!("Failed to fetch subjects: {}", e),
    }
    result
}

/// Get the courses of one subject
pub async fn get_courses(subject_code: &str) -> Result<Vec<Course>, String> {
    log::trace!("Fetching courses for subject: {}", subject_code);
    let result = api_client::get::<Vec<Course>>(&common::courses_endpoint(subject_code)).await;
    match &result {
        Ok(courses) => log::info!("Fetched {} courses for {}", courses.len(), subject_code),
        Err(e) => log::error!("Failed to fetch courses for {}: {}", subject_code, e),
    }
    result
}
