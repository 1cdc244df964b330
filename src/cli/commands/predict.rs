use anyhow::{anyhow, Result};
use common::Selection;
use form::PredictorForm;
use tracing::{debug, info, instrument};

use crate::client::UpstreamClient;

/// Requests a prediction and prints the result lines.
pub async fn predict(
    client: &UpstreamClient,
    subject: &str,
    course: &str,
    year: Option<&str>,
) -> Result<()> {
    let form = PredictorForm::default();
    let year = match year {
        Some(year) => year.to_string(),
        None => form.years().as_slice()[0].clone(),
    };

    let form = run_prediction(client, form, &Selection::new(subject, course, year)).await?;
    let view = form.view();

    match (view.result, view.submit_error) {
        (Some(result), _) => {
            println!("{}", result.grade_line);
            println!("{}", result.confidence_line);
            Ok(())
        }
        (None, Some(message)) => Err(anyhow!(message)),
        (None, None) => Err(anyhow!("No prediction was produced")),
    }
}

/// Walks `form` through the page flow for `wanted`: load subjects, pick the
/// subject, load its courses, pick course and year, submit.
///
/// Reference data failures and rejected picks are returned as errors. A
/// failed submission is not an error here; it is recorded on the returned
/// form like the page would show it.
#[instrument(skip(client, form))]
pub async fn run_prediction(
    client: &UpstreamClient,
    mut form: PredictorForm,
    wanted: &Selection,
) -> Result<PredictorForm> {
    if form.begin_subjects_load() {
        form.finish_subjects_load(client.list_subjects().await);
    }
    if let Some(message) = form.subjects().error() {
        return Err(anyhow!(message.to_string()));
    }

    if let Some(request) = form.select_subject(&wanted.subject)? {
        debug!("Loading courses for {}", request.subject);
        let result = client.list_courses(&request.subject).await;
        form.finish_courses_load(&request, result);
    }
    if let Some(message) = form.courses().error() {
        return Err(anyhow!(message.to_string()));
    }

    form.select_course(&wanted.course)?;
    form.select_year(&wanted.year)?;

    let snapshot = form.begin_submit()?;
    info!(
        "Requesting prediction for {} {} in {}",
        snapshot.subject, snapshot.course, snapshot.year
    );
    let result = client.predict(&snapshot).await;
    form.finish_submit(result);

    Ok(form)
}
