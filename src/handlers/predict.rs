use axum::{extract::State, http::StatusCode, response::Json};
use axum_valid::Valid;
use common::{Prediction, Selection};
use tracing::{debug, info, instrument};

use super::upstream_failure;
use crate::schemas::{AppState, ErrorResponse};

/// Request a grade prediction
///
/// The selection is validated before it is forwarded; incomplete selections
/// never reach the prediction backend.
#[utoipa::path(
    post,
    path = "/api/v1/predict",
    tag = "prediction",
    request_body = Selection,
    responses(
        (status = 200, description = "Prediction computed", body = Prediction),
        (status = 400, description = "Subject, course or year missing"),
        (status = 502, description = "Prediction backend unavailable", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn predict(
    State(state): State<AppState>,
    Valid(Json(selection)): Valid<Json<Selection>>,
) -> Result<Json<Prediction>, (StatusCode, Json<ErrorResponse>)> {
    debug!(
        "Forwarding prediction request for {} {} in {}",
        selection.subject, selection.course, selection.year
    );

    match state.upstream.predict(&selection).await {
        Ok(prediction) => {
            info!(
                "Prediction for {} {}: {} ({}%)",
                selection.subject,
                selection.course,
                prediction.predicted_grade,
                prediction.confidence
            );
            Ok(Json(prediction))
        }
        Err(e) => Err(upstream_failure("POST /predict", e)),
    }
}
