//! mockito test utilities
//!
//! - Unified async Server creation and JSON response helpers
//! - Wrap `server.url()` so tests do not couple to the mockito API directly

#![allow(dead_code)]

use mockito::{Matcher, Mock, Server, ServerGuard};

/// Start an async mockito Server
pub async fn start() -> ServerGuard {
    Server::new_async().await
}

/// Server base URL (including scheme)
pub fn url(server: &ServerGuard) -> String {
    server.url()
}

/// Convenience regex matcher helper
pub fn regex(re: &str) -> Matcher {
    Matcher::Regex(re.to_string())
}

/// JSON response mock (sets `content-type: application/json`)
pub async fn json_mock<P: Into<Matcher>>(
    server: &mut ServerGuard,
    method: &str,
    path: P,
    status: u16,
    body_json: &str,
) -> Mock {
    server
        .mock(method, path)
        .with_status(status as usize)
        .with_header("content-type", "application/json")
        .with_body(body_json)
        .create_async()
        .await
}

/// Empty-body response mock with the given status
pub async fn status_mock<P: Into<Matcher>>(
    server: &mut ServerGuard,
    method: &str,
    path: P,
    status: u16,
) -> Mock {
    server
        .mock(method, path)
        .with_status(status as usize)
        .create_async()
        .await
}
