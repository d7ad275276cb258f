//! Types used by the streams client.

pub mod http;
pub mod query;
pub mod request;
pub mod stream;

pub use http::{HttpConfig, HttpConfigBuilder};
pub use query::StreamQuery;
pub use request::{CreatedStream, NewStream, StreamUpdate};
pub use stream::StreamRecord;
