use common::{Prediction, Selection, PREDICT_ENDPOINT};
use crate::api_client;

/// Request a grade prediction for a complete selection
pub async fn predict(selection: &Selection) -> Result<Prediction, String> {
    log::debug!(
        "Requesting prediction for {} {} in {}",
        selection.subject, selection.course, selection.year
    );
    let result = api_client::post::<Prediction, _>(PREDICT_ENDPOINT, selection).await;
    match &result {
        Ok(prediction) => log::info!(
            "Predicted {} with {}% confidence",
            prediction.predicted_grade, prediction.confidence
        ),
        Err(e) => log::error!("Failed to get prediction: {}", e),
    }
    result
}
