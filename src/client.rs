use std::time::Duration;

use common::{
    Course, Prediction, Selection, Subject, API_PREFIX, PREDICT_ENDPOINT, SUBJECTS_ENDPOINT,
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("JSON decode failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// HTTP client for the prediction backend.
#[derive(Clone, Debug)]
pub struct UpstreamClient {
    base_url: String,
    client: reqwest::Client,
}

impl UpstreamClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(&config.upstream_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, endpoint)
    }

    /// `GET /api/v1/subjects`
    #[instrument(skip(self))]
    pub async fn list_subjects(&self) -> Result<Vec<Subject>, ClientError> {
        let response = self.client.get(self.url(SUBJECTS_ENDPOINT)).send().await?;
        decode(response).await
    }

    /// `GET /api/v1/subjects/courses?subject={code}`
    #[instrument(skip(self))]
    pub async fn list_courses(&self, subject_code: &str) -> Result<Vec<Course>, ClientError> {
        let url = self.url(&common::courses_endpoint(subject_code));
        let response = self.client.get(url).send().await?;
        decode(response).await
    }

    /// `POST /api/v1/predict`
    #[instrument(skip(self))]
    pub async fn predict(&self, selection: &Selection) -> Result<Prediction, ClientError> {
        let response = self
            .client
            .post(self.url(PREDICT_ENDPOINT))
            .json(selection)
            .send()
            .await?;
        decode(response).await
    }

    /// Whether the backend answers HTTP at all.
    pub async fn ping(&self) -> bool {
        match self.client.get(&self.base_url).send().await {
            Ok(_) => true,
            Err(e) => {
                warn!("Upstream {} unreachable: {}", self.base_url, e);
                false
            }
        }
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        debug!("Upstream answered {}: {}", status, body);
        return Err(ClientError::HttpStatus { status, body });
    }
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = UpstreamClient::new("http://localhost:8000/", Duration::from_secs(1)).unwrap();

        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url(SUBJECTS_ENDPOINT), "http://localhost:8000/api/v1/subjects");
    }

    #[test]
    fn test_from_config_uses_upstream_url() {
        let config = AppConfig {
            upstream_url: "http://predictions.internal:9000".to_string(),
            request_timeout_secs: 3,
            ..AppConfig::default()
        };

        let client = UpstreamClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://predictions.internal:9000");
    }

    #[tokio::test]
    async fn test_configured_timeout_applies_to_requests() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        // Accepts connections but never answers
        tokio::spawn(async move {
            let mut open = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                open.push(socket);
            }
        });

        let base_url = format!("http://{}", address);
        let client = UpstreamClient::new(&base_url, Duration::from_millis(200)).unwrap();
        let started = std::time::Instant::now();
        let result = client.list_subjects().await;

        assert!(matches!(result, Err(ClientError::Request(ref e)) if e.is_timeout()));
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
