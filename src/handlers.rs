pub mod health;
pub mod predict;
pub mod reference;

use axum::{http::StatusCode, response::Json};
use tracing::error;

use crate::client::ClientError;
use crate::schemas::ErrorResponse;

/// Translates a failed upstream call into the gateway's error response.
///
/// Upstream status codes are passed through; transport and decoding
/// failures become 502.
pub(crate) fn upstream_failure(
    endpoint: &str,
    err: ClientError,
) -> (StatusCode, Json<ErrorResponse>) {
    error!("Upstream call {} failed: {}", endpoint, err);
    let (status, error, code) = match err {
        ClientError::HttpStatus { status, .. } => (
            status,
            format!("Prediction backend returned {}", status),
            "UPSTREAM_ERROR",
        ),
        ClientError::Request(_) => (
            StatusCode::BAD_GATEWAY,
            "Prediction backend is unreachable".to_string(),
            "UPSTREAM_UNAVAILABLE",
        ),
        ClientError::Json(_) => (
            StatusCode::BAD_GATEWAY,
            "Prediction backend sent an invalid response".to_string(),
            "UPSTREAM_INVALID_RESPONSE",
        ),
    };

    (
        status,
        Json(ErrorResponse {
            error,
            code: code.to_string(),
            success: false,
        }),
    )
}
