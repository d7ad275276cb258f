//! Capability trait for the streams resource.
//!
//! Code that only needs the five stream operations can depend on
//! `dyn StreamsCapability` instead of the concrete client, which keeps
//! test doubles simple.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StreamsError;
use crate::types::{CreatedStream, NewStream, StreamQuery, StreamRecord, StreamUpdate};

/// The five stream operations.
///
/// `Err` is reserved for pre-flight validation failures. Failed round trips
/// yield the documented defaults: an empty list, `None` or `false`.
#[async_trait]
pub trait StreamsCapability: Send + Sync {
    /// Fetch a single stream by id.
    async fn get_stream_data(&self, id: &str) -> Result<Vec<StreamRecord>, StreamsError>;

    /// Fetch the streams matching `query`.
    async fn get_streams_data(&self, query: &StreamQuery) -> Vec<StreamRecord>;

    /// Create a stream; `None` when the request failed.
    async fn create_stream(
        &self,
        stream: &NewStream,
    ) -> Result<Option<CreatedStream>, StreamsError>;

    /// Partially update a stream; `None` when the request failed.
    async fn update_stream(&self, update: &StreamUpdate) -> Result<Option<Value>, StreamsError>;

    /// Expire a stream; `true` only when the server confirmed with `204`.
    async fn expire_stream(&self, id: &str) -> Result<bool, StreamsError>;
}
