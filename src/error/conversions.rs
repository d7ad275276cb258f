//! Conversions from third-party error types.

use super::types::StreamsError;

impl From<reqwest::Error> for StreamsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::ParseError(format!("Failed to decode response body: {err}"));
        }
        if let Some(status) = err.status() {
            return Self::api_error(status.as_u16(), err.to_string());
        }
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for StreamsError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for StreamsError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_error_becomes_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(StreamsError::from(err), StreamsError::JsonError(_)));
    }
}
