//! API server configuration.

use std::time::Duration;

/// Configuration for the REST API server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// Exact origin allowed for CORS; `None` allows any origin.
    pub cors_allow_origin: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_secs: 30,
            cors_allow_origin: None,
        }
    }
}

impl ApiConfig {
    /// Load configuration from `HACKHUB_API_*` environment variables,
    /// falling back to the defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("HACKHUB_API_HOST").unwrap_or(defaults.host),
            port: std::env::var("HACKHUB_API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            request_timeout_secs: std::env::var("HACKHUB_API_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            cors_allow_origin: std::env::var("HACKHUB_API_CORS_ALLOW_ORIGIN")
                .ok()
                .filter(|v| !v.is_empty()),
        }
    }

    /// The socket address string to bind the listener to.
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
