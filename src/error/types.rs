//! Core error types.

use thiserror::Error;

/// Errors produced by the streams client.
///
/// `ConfigurationError` and `ValidationError` are raised to the caller before
/// any request is sent. Everything else describes a failed round trip; the
/// documented client operations log those and degrade to a default result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StreamsError {
    /// Client construction or HTTP setup failed (missing token, bad URL, bad header)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A required argument was missing or empty
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Transport-level failure (connect, TLS, timeout, body read)
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The server answered with an unexpected status
    #[error("API error {code}: {message}")]
    ApiError {
        code: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// The response body was not JSON or had the wrong shape
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Request body serialization failed
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl StreamsError {
    /// Build an `ApiError` without details.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Build an `ApiError` from a status and the raw response body.
    ///
    /// The body is kept as `details` when it parses as JSON.
    pub fn from_response_body(code: u16, body_text: &str) -> Self {
        let details = serde_json::from_str::<serde_json::Value>(body_text).ok();
        let message = details
            .as_ref()
            .and_then(extract_message)
            .unwrap_or_else(|| {
                if body_text.trim().is_empty() {
                    format!("unexpected status {code}")
                } else {
                    body_text.trim().to_string()
                }
            });
        Self::ApiError {
            code,
            message,
            details,
        }
    }

    /// HTTP status attached to this error, if any.
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// True for errors raised before any request is made.
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::ConfigurationError(_))
    }

    /// True for failures of the round trip itself.
    pub const fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::ApiError { .. } | Self::ParseError(_)
        )
    }
}

fn extract_message(json: &serde_json::Value) -> Option<String> {
    let message = json
        .get("message")
        .and_then(|v| v.as_str())
        .or_else(|| json.get("error").and_then(|v| v.as_str()))
        .or_else(|| {
            json.get("error")
                .and_then(|v| v.get("message"))
                .and_then(|v| v.as_str())
        })
        .map(|s| s.trim().to_string())?;

    if message.is_empty() {
        None
    } else {
        Some(message)
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, StreamsError>;
