//! Server → client field translation.
//!
//! `STREAM_FIELD_MAP` is both a rename table and a whitelist: only server keys
//! listed here are copied into a [`StreamRecord`]. Every entry is currently an
//! identity mapping; renames belong here and nowhere else.

use serde_json::{Map, Value};
use tracing::warn;

use crate::error::StreamsError;
use crate::types::StreamRecord;

/// Ordered `(server key, client key)` pairs.
pub const STREAM_FIELD_MAP: &[(&str, &str)] = &[
    ("id", "id"),
    ("source", "source"),
    ("platform", "platform"),
    ("link", "link"),
    ("status", "status"),
    ("title", "title"),
    ("isPinned", "isPinned"),
    ("isExpired", "isExpired"),
    ("checkedAt", "checkedAt"),
    ("liveAt", "liveAt"),
    ("embedLink", "embedLink"),
    ("postedBy", "postedBy"),
    ("city", "city"),
    ("region", "region"),
    ("createdAt", "createdAt"),
    ("updatedAt", "updatedAt"),
];

/// Client key for a server key, or `None` when the key is not whitelisted.
pub fn client_key(server_key: &str) -> Option<&'static str> {
    STREAM_FIELD_MAP
        .iter()
        .find(|(server, _)| *server == server_key)
        .map(|(_, client)| *client)
}

/// Translate one server payload into a [`StreamRecord`].
pub fn map_stream_record(server: &Value) -> Result<StreamRecord, StreamsError> {
    let object = server.as_object().ok_or_else(|| {
        StreamsError::ParseError(format!("stream entry is not an object: {server}"))
    })?;

    let mut mapped = Map::with_capacity(STREAM_FIELD_MAP.len());
    for (from, to) in STREAM_FIELD_MAP {
        if let Some(value) = object.get(*from) {
            mapped.insert((*to).to_string(), value.clone());
        }
    }

    serde_json::from_value(Value::Object(mapped))
        .map_err(|e| StreamsError::ParseError(format!("invalid stream entry: {e}")))
}

/// Translate the `data` member of a read response.
///
/// `data` must be an array. Entries are translated one by one; an entry that
/// cannot be translated is logged and skipped so the rest still come back.
pub fn map_stream_records(data: &Value) -> Result<Vec<StreamRecord>, StreamsError> {
    let entries = data.as_array().ok_or_else(|| {
        StreamsError::ParseError(format!("expected `data` to be an array, got {data}"))
    })?;
    Ok(entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match map_stream_record(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(index, error = %e, "Skipping stream entry");
                None
            }
        })
        .collect())
}
