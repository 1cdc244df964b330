pub mod prediction;
pub mod reference;

use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            error_msg
        })?;

    parse_response("GET", endpoint, response).await
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let error_msg = format!("Failed to serialize request: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("POST {} - {}", endpoint, error_msg);
            error_msg
        })?;

    parse_response("POST", endpoint, response).await
}

async fn parse_response<T>(method: &str, endpoint: &str, response: Response) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    if !response.ok() {
        let error_msg = format!("HTTP error: {} {}", response.status(), response.status_text());
        log::error!("{} {} - {}", method, endpoint, error_msg);
        return Err(error_msg);
    }

    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    let data = response.json::<T>().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("{} {} - {}", method, endpoint, error_msg);
        error_msg
    })?;

    log::info!("{} {} - Success", method, endpoint);
    Ok(data)
}
