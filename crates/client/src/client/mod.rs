//! HTTP client for the exertrack API.

pub mod exercises;
pub mod health;
pub mod logs;
pub mod users;

use crate::error::{ClientError, Result};

/// Environment variable holding the server base URL.
pub const BASE_URL_ENV: &str = "EXERTRACK_URL";

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// HTTP client for the exertrack API.
#[derive(Debug, Clone)]
pub struct ExertrackClient {
    client: reqwest::Client,
    base_url: String,
}

impl ExertrackClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment (`EXERTRACK_URL` or [`DEFAULT_BASE_URL`]).
    ///
    /// An empty variable counts as unset.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a success body, or turn the response into a [`ClientError`].
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let response = self.check_status(response).await?;
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(ClientError::from)
    }

    /// Pass successful responses through; map failures to errors.
    async fn check_status(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound {
                resource: response.url().path().to_string(),
            });
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ClientError::ServerError {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

/// Extracts the `error` field from a JSON error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("error")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ExertrackClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url("/api/users"), "http://localhost:3000/api/users");
    }

    #[test]
    fn test_from_env_reads_base_url_variable() {
        std::env::set_var(BASE_URL_ENV, "http://tracker.test:4000/");
        assert_eq!(ExertrackClient::from_env().base_url(), "http://tracker.test:4000");

        std::env::set_var(BASE_URL_ENV, "");
        assert_eq!(ExertrackClient::from_env().base_url(), DEFAULT_BASE_URL);

        std::env::remove_var(BASE_URL_ENV);
        assert_eq!(ExertrackClient::from_env().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_error_message_from_json_body() {
        assert_eq!(
            error_message(r#"{"error":"Username is required"}"#),
            "Username is required"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(error_message("Request Timeout"), "Request Timeout");
        assert_eq!(error_message(r#"{"status":"down"}"#), r#"{"status":"down"}"#);
    }
}
