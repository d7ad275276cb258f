//! Streams client builder.

use std::time::Duration;

use crate::config::StreamsConfig;
use crate::error::StreamsError;
use crate::types::HttpConfig;

use super::StreamsClient;

/// Builder for [`StreamsClient`].
///
/// ```rust,ignore
/// let client = StreamsClient::builder()
///     .token("my-jwt")
///     .base_url("http://localhost:3000")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct StreamsClientBuilder {
    token: Option<String>,
    base_url: Option<String>,
    http_config: HttpConfig,
    http_client: Option<reqwest::Client>,
}

impl StreamsClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bearer token (required)
    pub fn token<S: Into<String>>(mut self, token: S) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.http_config.timeout = Some(timeout);
        self
    }

    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.http_config.connect_timeout = Some(timeout);
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.http_config.user_agent = Some(user_agent.into());
        self
    }

    pub fn proxy<S: Into<String>>(mut self, proxy: S) -> Self {
        self.http_config.proxy = Some(proxy.into());
        self
    }

    /// Header sent with every request
    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.http_config.headers.insert(key.into(), value.into());
        self
    }

    /// Replace the whole HTTP configuration.
    pub fn http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// Use a caller-supplied `reqwest::Client`; HTTP settings on this builder are then ignored.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<StreamsClient, StreamsError> {
        let token = self.token.ok_or_else(|| {
            StreamsError::ConfigurationError("You must pass an authentication token".to_string())
        })?;

        let mut config = StreamsConfig::new(token).with_http_config(self.http_config);
        if let Some(url) = self.base_url {
            config = config.with_base_url(url);
        }

        match self.http_client {
            Some(client) => StreamsClient::with_http_client(config, client),
            None => StreamsClient::from_config(config),
        }
    }
}
