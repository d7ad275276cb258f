//! Unified entry for test support modules
//!
//! - Lightweight wrappers for the mock backends (mockito)
//! - Shared server payload fixtures

#![allow(dead_code)]

pub mod mockito;

use serde_json::{Value, json};

/// A full server-side stream payload, plus fields outside the whitelist.
pub fn server_stream(id: &str) -> Value {
    json!({
        "id": id,
        "source": "x",
        "platform": "Twitch",
        "link": format!("https://twitch.tv/{id}"),
        "status": "Live",
        "title": "Main St march",
        "isPinned": false,
        "isExpired": false,
        "checkedAt": "2024-06-01T12:00:00Z",
        "liveAt": "2024-06-01T11:30:00Z",
        "embedLink": format!("https://player.twitch.tv/?channel={id}"),
        "postedBy": "ops",
        "city": "Portland",
        "region": "OR",
        "createdAt": "2024-06-01T11:00:00Z",
        "updatedAt": "2024-06-01T12:01:00Z",
        "userId": 12,
        "internalNotes": "not for clients"
    })
}

/// `{"data": [...]}` envelope used by the read endpoints.
pub fn data_envelope(entries: Vec<Value>) -> Value {
    json!({ "data": entries })
}
