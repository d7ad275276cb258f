//! HTTP plumbing shared by the client operations.

pub mod client;
pub mod headers;

pub use client::build_http_client;
pub use headers::HttpHeaderBuilder;
