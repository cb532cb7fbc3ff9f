//! HTTP client for the back-office REST API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::response::Items;

/// HTTP client with bearer auth and centralized `/api` prefixing.
///
/// Paths are passed without the `/api` prefix ("/customers",
/// "/reports/summary"); absolute `http(s)://` URLs go through untouched.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Resolve a path against the base URL, adding the `/api` prefix
    /// unless the caller already supplied it
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        let clean = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        if clean == "/api" || clean.starts_with("/api/") {
            format!("{base}{clean}")
        } else {
            format!("{base}/api{clean}")
        }
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.build_url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Ok(Self::handle_response(response).await?.1)
    }

    /// GET a list endpoint, normalizing whatever envelope comes back
    pub async fn get_items<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Vec<T>> {
        Ok(self.get::<Items<T>>(path).await?.into_vec())
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        Ok(self.post_with_status(path, body).await?.1)
    }

    /// POST and keep the status code (some endpoints encode meaning in
    /// 201 vs 200, e.g. idempotent assignment creation)
    pub async fn post_with_status<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<(StatusCode, T)> {
        let mut request = self.client.post(self.build_url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.put(self.build_url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Ok(Self::handle_response(response).await?.1)
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.delete(self.build_url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Ok(Self::handle_response(response).await?.1)
    }

    /// Handle the HTTP response.
    ///
    /// Error bodies are expected as JSON `{message}` or `{error}`; the
    /// raw text (or `HTTP <status>`) is the fallback. Empty success
    /// bodies decode as JSON null so `Value`/`Option` targets work.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<(StatusCode, T)> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = extract_error_message(&text)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(message)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    Err(ClientError::Validation(message))
                }
                _ => Err(ClientError::Internal(message)),
            };
        }

        let body = if text.is_empty() { "null" } else { text.as_str() };
        let value = serde_json::from_str(body)
            .map_err(|e| ClientError::InvalidResponse(format!("{e}: {body}")))?;
        Ok((status, value))
    }
}

/// Pull `message`/`error` out of a JSON error body, or fall back to the
/// raw text when the body is not JSON
fn extract_error_message(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(text) {
        for key in ["message", "error"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                return Some(msg.to_string());
            }
        }
    }
    Some(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> HttpClient {
        ClientConfig::new(base).build_http_client()
    }

    #[test]
    fn url_building_centralizes_api_prefix() {
        let c = client("http://localhost:5000/");
        assert_eq!(
            c.build_url("/customers"),
            "http://localhost:5000/api/customers"
        );
        assert_eq!(c.build_url("customers"), "http://localhost:5000/api/customers");
        assert_eq!(
            c.build_url("/api/customers"),
            "http://localhost:5000/api/customers"
        );
        assert_eq!(c.build_url("http://other/x"), "http://other/x");
    }

    #[test]
    fn error_message_extraction() {
        assert_eq!(
            extract_error_message(r#"{"message":"boom"}"#).as_deref(),
            Some("boom")
        );
        assert_eq!(
            extract_error_message(r#"{"error":"denied"}"#).as_deref(),
            Some("denied")
        );
        assert_eq!(extract_error_message("plain text").as_deref(), Some("plain text"));
        assert_eq!(extract_error_message(""), None);
    }
}
