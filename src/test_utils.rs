pub mod test_utils {
    use crate::client::UpstreamClient;
    use crate::config::AppConfig;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::{
        extract::{Query, State},
        http::StatusCode,
        response::{IntoResponse, Json, Response},
        routing::{get, post},
        Router,
    };
    use common::Selection;
    use serde::Deserialize;
    use serde_json::json;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::net::TcpListener;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// How the fake prediction backend answers `POST /api/v1/predict`.
    #[derive(Clone, Copy, Debug)]
    pub enum PredictBehavior {
        /// 200 with `{"predictedGrade": "3.7", "confidence": 82}`
        Succeed,
        /// The given status with a plain text body
        Fail(StatusCode),
    }

    #[derive(Clone)]
    struct FakeState {
        behavior: PredictBehavior,
        predict_calls: Arc<AtomicUsize>,
    }

    /// In-process stand-in for the prediction backend.
    pub struct FakeUpstream {
        pub base_url: String,
        predict_calls: Arc<AtomicUsize>,
    }

    impl FakeUpstream {
        /// Number of prediction requests that reached the backend.
        pub fn predict_calls(&self) -> usize {
            self.predict_calls.load(Ordering::SeqCst)
        }

        pub fn client(&self) -> UpstreamClient {
            UpstreamClient::new(&self.base_url, Duration::from_secs(5))
                .expect("Failed to build upstream client")
        }
    }

    #[derive(Deserialize)]
    struct SubjectQuery {
        subject: String,
    }

    async fn subjects() -> Json<serde_json::Value> {
        Json(json!([
            {"id": 1, "subject_code": "CS", "name": "Computer Science"},
            {"id": 2, "subject_code": "MATH"}
        ]))
    }

    async fn courses(Query(query): Query<SubjectQuery>) -> Json<serde_json::Value> {
        let courses = match query.subject.as_str() {
            "CS" => json!([{"id": 10, "course_number": "101", "title": "Intro"}]),
            "MATH" => json!([
                {"id": 20, "course_number": "221", "title": "Calculus"},
                {"id": 21, "course_number": "301"}
            ]),
            _ => json!([]),
        };
        Json(courses)
    }

    async fn predict(State(state): State<FakeState>, Json(selection): Json<Selection>) -> Response {
        state.predict_calls.fetch_add(1, Ordering::SeqCst);
        match state.behavior {
            PredictBehavior::Succeed if selection.course == "221" => {
                Json(json!({"predictedGrade": 3.25, "confidence": 67.5})).into_response()
            }
            PredictBehavior::Succeed => {
                Json(json!({"predictedGrade": "3.7", "confidence": 82})).into_response()
            }
            PredictBehavior::Fail(status) => (status, "model exploded").into_response(),
        }
    }

    /// Start a fake prediction backend on an ephemeral local port.
    pub async fn spawn_fake_upstream(behavior: PredictBehavior) -> FakeUpstream {
        let predict_calls = Arc::new(AtomicUsize::new(0));
        let state = FakeState {
            behavior,
            predict_calls: predict_calls.clone(),
        };
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .route("/api/v1/subjects", get(subjects))
            .route("/api/v1/subjects/courses", get(courses))
            .route("/api/v1/predict", post(predict))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake upstream");
        let address = listener.local_addr().expect("Fake upstream has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake upstream crashed");
        });

        FakeUpstream {
            base_url: format!("http://{}", address),
            predict_calls,
        }
    }

    /// URL of a local port nothing listens on.
    pub async fn unreachable_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind probe listener");
        let address = listener.local_addr().expect("Probe listener has no address");
        drop(listener);
        format!("http://{}", address)
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is taken from RUST_LOG, defaulting to WARN. The
    /// subscriber is global; later calls keep the first one.
    pub fn init_test_tracing() {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let _ = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Create axum app for testing, forwarding to `upstream_url`.
    pub fn setup_test_app(upstream_url: &str, static_dir: Option<PathBuf>) -> Router {
        init_test_tracing();

        let config = AppConfig {
            upstream_url: upstream_url.to_string(),
            static_dir,
            request_timeout_secs: 5,
            ..AppConfig::default()
        };
        create_router(AppState::new(config).expect("Failed to build app state"))
    }
}
