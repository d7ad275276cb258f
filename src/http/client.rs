//! `reqwest::Client` construction from [`HttpConfig`].

use crate::error::StreamsError;
use crate::http::headers::HttpHeaderBuilder;
use crate::types::HttpConfig;

/// Build a `reqwest::Client` honoring timeouts, proxy, user agent and default headers.
pub fn build_http_client(cfg: &HttpConfig) -> Result<reqwest::Client, StreamsError> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = cfg.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(connect_timeout) = cfg.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }
    if let Some(proxy_url) = &cfg.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| StreamsError::ConfigurationError(format!("Invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }
    if let Some(user_agent) = &cfg.user_agent {
        builder = builder.user_agent(user_agent);
    }
    if !cfg.headers.is_empty() {
        let headers = HttpHeaderBuilder::new()
            .with_custom_headers(&cfg.headers)?
            .build();
        builder = builder.default_headers(headers);
    }

    builder
        .build()
        .map_err(|e| StreamsError::ConfigurationError(format!("Failed to build HTTP client: {e}")))
}
