//! Request bodies for the mutating operations.
//!
//! Absent fields are left out of the JSON body entirely rather than sent as
//! `null`, so the server only sees what the caller actually set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body for `POST /streams`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewStream {
    #[validate(length(min = 1, message = "createStream requires a link"))]
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl NewStream {
    /// Start a new stream body for the given link.
    pub fn new<S: Into<String>>(link: S) -> Self {
        Self {
            link: link.into(),
            ..Default::default()
        }
    }

    pub fn with_city<S: Into<String>>(mut self, city: S) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_region<S: Into<String>>(mut self, region: S) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_posted_by<S: Into<String>>(mut self, posted_by: S) -> Self {
        self.posted_by = Some(posted_by.into());
        self
    }

    pub fn with_platform<S: Into<String>>(mut self, platform: S) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_status<S: Into<String>>(mut self, status: S) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Partial update for `PATCH /streams/{id}`.
///
/// `id` only selects the path and is never part of the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StreamUpdate {
    #[serde(skip)]
    #[validate(length(min = 1, message = "updateStream requires an id"))]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_link: Option<String>,
}

impl StreamUpdate {
    /// Start an empty update for the given stream id.
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_platform<S: Into<String>>(mut self, platform: S) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_link<S: Into<String>>(mut self, link: S) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_status<S: Into<String>>(mut self, status: S) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_city<S: Into<String>>(mut self, city: S) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_region<S: Into<String>>(mut self, region: S) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_posted_by<S: Into<String>>(mut self, posted_by: S) -> Self {
        self.posted_by = Some(posted_by.into());
        self
    }

    pub const fn with_checked_at(mut self, checked_at: DateTime<Utc>) -> Self {
        self.checked_at = Some(checked_at);
        self
    }

    pub const fn with_live_at(mut self, live_at: DateTime<Utc>) -> Self {
        self.live_at = Some(live_at);
        self
    }

    pub fn with_embed_link<S: Into<String>>(mut self, embed_link: S) -> Self {
        self.embed_link = Some(embed_link.into());
        self
    }
}

/// Result of a successful `POST /streams` round trip.
///
/// `data` is the response body's `data` member exactly as received; it is not
/// passed through the field map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedStream {
    pub status: u16,
    pub data: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn new_stream_omits_unset_fields() {
        let body = serde_json::to_value(NewStream::new("http://a").with_posted_by("ops")).unwrap();
        assert_eq!(body, json!({ "link": "http://a", "postedBy": "ops" }));
    }

    #[test]
    fn new_stream_requires_link() {
        assert!(NewStream::default().validate().is_err());
        assert!(NewStream::new("http://a").validate().is_ok());
    }

    #[test]
    fn update_never_serializes_id() {
        let live_at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let update = StreamUpdate::new("7")
            .with_status("live")
            .with_embed_link("http://embed")
            .with_live_at(live_at);
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(
            body,
            json!({
                "status": "live",
                "embedLink": "http://embed",
                "liveAt": "2024-06-01T12:00:00Z"
            })
        );
    }

    #[test]
    fn update_requires_id() {
        assert!(StreamUpdate::default().validate().is_err());
        assert!(StreamUpdate::new("7").validate().is_ok());
    }
}
