//! Client configuration

/// Client configuration for connecting to the back-office API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout_secs: 30,
        }
    }

    /// Read configuration from the environment (.env honored)
    ///
    /// - `RETDESK_API_BASE_URL` (default: http://localhost:5000)
    /// - `RETDESK_API_TOKEN` (optional)
    /// - `RETDESK_HTTP_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let base_url = std::env::var("RETDESK_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());
        let mut config = Self::new(base_url);

        if let Ok(token) = std::env::var("RETDESK_API_TOKEN")
            && !token.is_empty()
        {
            config.token = Some(token);
        }
        if let Ok(timeout) = std::env::var("RETDESK_HTTP_TIMEOUT_SECS")
            && let Ok(secs) = timeout.parse()
        {
            config.timeout_secs = secs;
        }
        config
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000")
    }
}
