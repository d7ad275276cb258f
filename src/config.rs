//! Streams client configuration.

use secrecy::{ExposeSecret, SecretString};

use crate::error::StreamsError;
use crate::types::HttpConfig;

/// Service address used when no base URL is supplied.
pub const DEFAULT_BASE_URL: &str = "https://streams.streamwall.io";

/// Configuration for a [`crate::StreamsClient`].
///
/// # Example
/// ```rust,ignore
/// use streamsource::StreamsConfig;
///
/// let config = StreamsConfig::new("my-jwt").with_base_url("http://localhost:3000");
/// config.validate()?;
/// ```
#[derive(Debug, Clone)]
pub struct StreamsConfig {
    /// Bearer token for mutating requests (securely stored)
    pub token: SecretString,

    /// Base URL for the streams service
    pub base_url: String,

    /// HTTP configuration
    pub http_config: HttpConfig,
}

impl StreamsConfig {
    /// Create a configuration for the default service address.
    pub fn new<S: Into<String>>(token: S) -> Self {
        Self {
            token: SecretString::from(token.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            http_config: HttpConfig::default(),
        }
    }

    /// Override the service address. An empty value keeps the default.
    pub fn with_base_url<S: Into<String>>(mut self, url: S) -> Self {
        let url = url.into();
        if !url.trim().is_empty() {
            self.base_url = url;
        }
        self
    }

    pub fn with_http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// `Bearer {token}`
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.token.expose_secret())
    }

    /// Base URL without trailing slashes, ready for path concatenation.
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn validate(&self) -> Result<(), StreamsError> {
        if self.token.expose_secret().is_empty() {
            return Err(StreamsError::ConfigurationError(
                "You must pass an authentication token".to_string(),
            ));
        }

        if self.base_url.is_empty() {
            return Err(StreamsError::ConfigurationError(
                "Base URL cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(StreamsError::ConfigurationError(
                "Base URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }
}
