//! streamsource
//!
//! Async client for the Streamsource `/streams` API: fetch, create, update and
//! expire live stream records over HTTP.
//!
//! ```rust,ignore
//! use streamsource::prelude::*;
//!
//! let client = StreamsClient::new("my-jwt", None)?;
//! let live = client
//!     .get_streams_data(&StreamQuery::new().param("status", "live"))
//!     .await;
//! for stream in live {
//!     println!("{:?} {:?}", stream.id, stream.link);
//! }
//! ```
//!
//! The documented operations never surface transport failures; they log them
//! and fall back to an empty/`false`/`None` result. The `try_*` variants on
//! [`StreamsClient`] return the underlying [`StreamsError`] instead.
#![deny(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod field_map;
pub mod http;
pub mod telemetry;
pub mod traits;
pub mod types;

pub use client::{StreamsClient, StreamsClientBuilder};
pub use config::{DEFAULT_BASE_URL, StreamsConfig};
pub use error::{Result, StreamsError};

/// Common imports for working with the streams client.
pub mod prelude {
    pub use crate::client::{StreamsClient, StreamsClientBuilder};
    pub use crate::config::{DEFAULT_BASE_URL, StreamsConfig};
    pub use crate::error::{Result, StreamsError};
    pub use crate::traits::StreamsCapability;
    pub use crate::types::{
        CreatedStream, HttpConfig, NewStream, StreamQuery, StreamRecord, StreamUpdate,
    };
}
