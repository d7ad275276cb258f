//! Error Handling Module
//!
//! - Core error type (`StreamsError`)
//! - Type conversions from `reqwest`, `serde_json` and `validator` errors
//!
//! # Example
//!
//! ```rust,ignore
//! use streamsource::error::StreamsError;
//!
//! let error = StreamsError::api_error(404, "Not found");
//! assert_eq!(error.status_code(), Some(404));
//! assert!(!error.is_validation_error());
//! ```

mod conversions;
pub mod types;

pub use types::*;
