use crate::handlers::{
    health::health_check,
    predict::predict,
    reference::{get_courses, get_subjects},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let timeout = state.config.request_timeout();

    let mut router = Router::new()
        // Health check
        .route("/health", get(health_check))
        // Reference data
        .route("/api/v1/subjects", get(get_subjects))
        .route("/api/v1/subjects/courses", get(get_courses))
        // Predictions
        .route("/api/v1/predict", post(predict))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // Frontend assets; unknown paths get index.html so client-side routes resolve
    if let Some(dir) = state.config.static_dir.clone() {
        router = router.fallback_service(frontend_service(&dir));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

fn frontend_service(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}
