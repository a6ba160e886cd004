// web_app/api/client.rs - HTTP client for the backend addiction API
//
// Wraps reqwest with the base URL, timeout and default headers, and turns
// every response into either the decoded payload or an ApiError carrying
// the message the user should see.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::sync::{Mutex, OnceLock};

use crate::web_app::config::SiteConfig;
use crate::web_app::error::ApiError;
use crate::web_app::model::{
    extract_payload, Addiction, AddictionSummary, AddictionTypes, ErrorBody,
};
use crate::web_app::service::is_dot_segment;

/// Header carrying the client-side request time in unix milliseconds
pub const REQUESTED_AT_HEADER: &str = "X-Requested-At";

static CLIENT: OnceLock<ApiClient> = OnceLock::new();
static TEST_CLIENT_OVERRIDE: Mutex<Option<ApiClient>> = Mutex::new(None);

/// Install the process-wide client
pub fn init_client(client: ApiClient) {
    tracing::info!("Initializing backend API client for {}", client.base_url());
    if CLIENT.set(client).is_err() {
        tracing::warn!("Backend API client already initialized");
    }
}

/// Set a client override for testing
pub fn set_test_client(client: ApiClient) {
    if let Ok(mut guard) = TEST_CLIENT_OVERRIDE.lock() {
        *guard = Some(client);
    }
}

/// Get the process-wide client
pub fn get_client() -> Option<ApiClient> {
    if let Ok(guard) = TEST_CLIENT_OVERRIDE.lock() {
        if let Some(client) = guard.as_ref() {
            return Some(client.clone());
        }
    }

    let client = CLIENT.get().cloned();
    if client.is_none() {
        tracing::warn!("Backend API client is not initialized!");
    }
    client
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &SiteConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.api_base_url).map_err(|e| {
            ApiError::Validation(format!("Invalid API base URL '{}': {}", config.api_base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Validation(format!(
                "API base URL '{}' cannot be a base",
                config.api_base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(config.request_timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Validation(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with the given path segments appended, each percent-encoded
    ///
    /// Dot-only segments are refused instead of being silently dropped.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        if let Some(segment) = segments.iter().find(|s| is_dot_segment(s)) {
            return Err(ApiError::Validation(format!("Invalid path segment '{}'", segment)));
        }

        let mut url = self.base_url.clone();
        url.set_query(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// `GET /addictions/types`
    pub async fn addiction_types(&self) -> Result<AddictionTypes, ApiError> {
        self.get_json(&["addictions", "types"]).await
    }

    /// `GET /addictions/{id}`
    pub async fn addiction(&self, id: &str) -> Result<Addiction, ApiError> {
        let value = self.get_payload(&["addictions", id]).await?;
        if value.is_null() {
            return Err(ApiError::NotFound(format!("Addiction '{}' was not found", id)));
        }
        decode(value)
    }

    /// `GET /addictions/search/{query}`
    pub async fn search(&self, query: &str) -> Result<Vec<AddictionSummary>, ApiError> {
        let value = self.get_payload(&["addictions", "search", query]).await?;
        if value.is_null() {
            return Ok(Vec::new());
        }
        decode(value)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let value = self.get_payload(segments).await?;
        decode(value)
    }

    /// Send a GET and return the unwrapped JSON payload
    async fn get_payload(&self, segments: &[&str]) -> Result<serde_json::Value, ApiError> {
        let url = self.endpoint(segments)?;
        let requested_at = chrono::Utc::now().timestamp_millis();

        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .header(REQUESTED_AT_HEADER, requested_at.to_string())
            .send()
            .await
            .map_err(|e| {
                tracing::error!("API request error for {}: {}", url, e);
                ApiError::network()
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            let error = status_error(status, body.message);
            tracing::error!("API error for {}: {} ({})", url, error, status);
            return Err(error);
        }

        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body from {}: {}", url, e);
            ApiError::network()
        })?;

        // 204 or an empty 200: success with no payload
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::Value::Null);
        }

        let body: serde_json::Value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!("Invalid JSON from {}: {}", url, e);
            ApiError::server(status.as_u16(), Some("Invalid response from server".to_string()))
        })?;

        Ok(extract_payload(body))
    }
}

fn status_error(status: StatusCode, message: Option<String>) -> ApiError {
    if status == StatusCode::NOT_FOUND {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "The requested resource was not found".to_string());
        ApiError::NotFound(message)
    } else {
        ApiError::server(status.as_u16(), message)
    }
}

fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| {
        tracing::error!("Unexpected payload shape: {}", e);
        ApiError::server(200, Some("Invalid response from server".to_string()))
    })
}
