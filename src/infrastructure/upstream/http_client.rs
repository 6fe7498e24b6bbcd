//! # HTTP Client Utilities
//!
//! Thin wrapper around `reqwest` for the ERP gateway.
//!
//! Provides:
//! - Configurable timeouts
//! - Default headers (authentication token)
//! - JSON deserialization
//! - Status code → [`UpstreamError`] mapping that keeps the error body
//!
//! No retries are performed; every call is attempted once.
//!
//! # Examples
//!
//! ```ignore
//! use article_ek_proxy::infrastructure::upstream::http_client::HttpClient;
//!
//! let client = HttpClient::with_headers(5000, headers)?;
//! let response: MyResponse = client.get_with_params(url, &[("page", "1")]).await?;
//! ```

use crate::infrastructure::upstream::error::{UpstreamError, UpstreamResult};
use reqwest::header::HeaderMap;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// HTTP client wrapper for the ERP gateway.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with headers sent on every request.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::InternalError` if the client cannot be created.
    pub fn with_headers(timeout_ms: u64, default_headers: HeaderMap) -> UpstreamResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .default_headers(default_headers)
            .build()
            .map_err(|e| {
                UpstreamError::internal_error(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, timeout_ms })
    }

    /// Makes a GET request with query parameters and deserializes the JSON
    /// response.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::Timeout`/`Connection` if the request fails,
    /// a status-specific variant for non-2xx answers and
    /// `UpstreamError::ProtocolError` if the body cannot be parsed.
    pub async fn get_with_params<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> UpstreamResult<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Handles the HTTP response, checking status and deserializing JSON.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> UpstreamResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                UpstreamError::protocol_error(format!("Failed to parse response: {}", e))
            })
        } else {
            let error_body = response.text().await.unwrap_or_default();
            Err(self.map_status_error(status, &error_body))
        }
    }

    /// Maps a reqwest error to an UpstreamError.
    fn map_reqwest_error(&self, error: reqwest::Error) -> UpstreamError {
        if error.is_timeout() {
            UpstreamError::timeout(format!("Request timed out after {}ms", self.timeout_ms))
        } else if error.is_connect() {
            UpstreamError::connection(format!("Connection failed: {}", error))
        } else {
            UpstreamError::connection(format!("HTTP request failed: {}", error))
        }
    }

    /// Maps an HTTP status code to an UpstreamError.
    fn map_status_error(&self, status: StatusCode, body: &str) -> UpstreamError {
        let payload = error_payload(body);
        match status {
            StatusCode::BAD_REQUEST => {
                UpstreamError::invalid_request(format!("Bad request ({})", status), payload)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => UpstreamError::authentication(
                format!("Authentication failed ({})", status),
                payload,
            ),
            StatusCode::NOT_FOUND => {
                UpstreamError::not_found(format!("Resource not found ({})", status), payload)
            }
            StatusCode::TOO_MANY_REQUESTS => {
                UpstreamError::rate_limited("Rate limit exceeded", payload)
            }
            _ => UpstreamError::status(
                status.as_u16(),
                format!("Request failed with status {}", status),
                payload,
            ),
        }
    }
}

/// Keeps an error body as JSON when it parses, otherwise as a string.
fn error_payload(body: &str) -> Option<Value> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_owned())))
}
