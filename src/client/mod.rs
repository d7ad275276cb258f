//! Streams Client Implementation
//!
//! Every operation is a single independent request/response round trip. The
//! client holds only the immutable configuration, the prebuilt auth headers
//! and a `reqwest::Client`, so clones can be used from many tasks at once.
//!
//! Each documented operation has a `try_*` twin that reports every failure
//! as a [`StreamsError`]. The documented operations themselves only return
//! `Err` for pre-flight validation; transport and response failures are logged
//! and turned into an empty `Vec`, `None` or `false`.

mod builder;

pub use builder::StreamsClientBuilder;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::{debug, error};
use validator::Validate;

use crate::config::StreamsConfig;
use crate::error::StreamsError;
use crate::field_map::map_stream_records;
use crate::http::{HttpHeaderBuilder, build_http_client};
use crate::traits::StreamsCapability;
use crate::types::{CreatedStream, NewStream, StreamQuery, StreamRecord, StreamUpdate};

/// Client for the `/streams` resource.
#[derive(Clone)]
pub struct StreamsClient {
    config: StreamsConfig,
    /// `Authorization` + `Content-Type` for mutating requests
    auth_headers: HeaderMap,
    http_client: reqwest::Client,
}

static_assertions::assert_impl_all!(StreamsClient: Send, Sync, Clone);

impl std::fmt::Debug for StreamsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamsClient")
            .field("base_url", &self.config.base_url)
            .field("has_token", &!self.config.token.expose_secret().is_empty())
            .field("timeout", &self.config.http_config.timeout)
            .finish()
    }
}

impl StreamsClient {
    /// Create a client from a token and an optional base URL.
    ///
    /// A missing or empty `base_url` falls back to [`crate::DEFAULT_BASE_URL`].
    pub fn new<S: Into<String>>(token: S, base_url: Option<&str>) -> Result<Self, StreamsError> {
        let mut config = StreamsConfig::new(token);
        if let Some(url) = base_url {
            config = config.with_base_url(url);
        }
        Self::from_config(config)
    }

    /// Create a client from a full configuration.
    pub fn from_config(config: StreamsConfig) -> Result<Self, StreamsError> {
        config.validate()?;
        let http_client = build_http_client(&config.http_config)?;
        Self::with_http_client(config, http_client)
    }

    /// Create a client that reuses an existing `reqwest::Client`.
    ///
    /// `config.http_config` is not applied to a caller-supplied client.
    pub fn with_http_client(
        config: StreamsConfig,
        http_client: reqwest::Client,
    ) -> Result<Self, StreamsError> {
        config.validate()?;
        let auth_headers = HttpHeaderBuilder::new()
            .with_bearer_auth(config.token.expose_secret())?
            .with_json_content_type()
            .build();
        Ok(Self {
            config,
            auth_headers,
            http_client,
        })
    }

    pub fn builder() -> StreamsClientBuilder {
        StreamsClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub const fn config(&self) -> &StreamsConfig {
        &self.config
    }

    // ========================================================================
    // Documented operations
    // ========================================================================

    /// `GET /streams/{id}`, mapped through the field map.
    ///
    /// Returns an empty list when the request or response fails.
    pub async fn get_stream_data(&self, id: &str) -> Result<Vec<StreamRecord>, StreamsError> {
        require_id(id, "getStreamData requires an id")?;
        let endpoint = self.stream_endpoint(id);
        match self.fetch_records(&endpoint, None).await {
            Ok(records) => Ok(records),
            Err(e) => {
                error!(endpoint = %endpoint, id = %id, error = %e, "Could not fetch stream");
                Ok(Vec::new())
            }
        }
    }

    /// `GET /streams?{query}`, mapped through the field map.
    ///
    /// Returns an empty list when the request or response fails.
    pub async fn get_streams_data(&self, query: &StreamQuery) -> Vec<StreamRecord> {
        let endpoint = self.collection_endpoint();
        match self.fetch_records(&endpoint, Some(query)).await {
            Ok(records) => records,
            Err(e) => {
                error!(endpoint = %endpoint, query = ?query.pairs(), error = %e, "Could not fetch streams");
                Vec::new()
            }
        }
    }

    /// `POST /streams`.
    ///
    /// `Ok(None)` means the round trip failed; the failure has been logged.
    pub async fn create_stream(
        &self,
        stream: &NewStream,
    ) -> Result<Option<CreatedStream>, StreamsError> {
        stream.validate()?;
        let endpoint = self.collection_endpoint();
        match self.send_create(&endpoint, stream).await {
            Ok(created) => Ok(Some(created)),
            Err(e) => {
                error!(endpoint = %endpoint, body = ?stream, error = %e, "Error creating stream");
                Ok(None)
            }
        }
    }

    /// `PATCH /streams/{id}`; yields the response's `data` member unchanged.
    ///
    /// `Ok(None)` means the round trip failed; the failure has been logged.
    pub async fn update_stream(
        &self,
        update: &StreamUpdate,
    ) -> Result<Option<Value>, StreamsError> {
        update.validate()?;
        require_id(&update.id, "updateStream requires an id")?;
        let endpoint = self.stream_endpoint(&update.id);
        match self.send_update(&endpoint, update).await {
            Ok(data) => Ok(Some(data)),
            Err(e) => {
                error!(endpoint = %endpoint, id = %update.id, body = ?update, error = %e, "Error updating stream");
                Ok(None)
            }
        }
    }

    /// `DELETE /streams/{id}`; `true` only on `204 No Content`.
    pub async fn expire_stream(&self, id: &str) -> Result<bool, StreamsError> {
        require_id(id, "Must provide a stream id")?;
        let endpoint = self.stream_endpoint(id);
        match self.send_expire(&endpoint).await {
            Ok(()) => Ok(true),
            Err(e) => {
                error!(endpoint = %endpoint, id = %id, error = %e, "Error expiring stream");
                Ok(false)
            }
        }
    }

    // ========================================================================
    // Fallible variants
    // ========================================================================

    pub async fn try_get_stream_data(&self, id: &str) -> Result<Vec<StreamRecord>, StreamsError> {
        require_id(id, "getStreamData requires an id")?;
        self.fetch_records(&self.stream_endpoint(id), None).await
    }

    pub async fn try_get_streams_data(
        &self,
        query: &StreamQuery,
    ) -> Result<Vec<StreamRecord>, StreamsError> {
        self.fetch_records(&self.collection_endpoint(), Some(query))
            .await
    }

    pub async fn try_create_stream(&self, stream: &NewStream) -> Result<CreatedStream, StreamsError> {
        stream.validate()?;
        self.send_create(&self.collection_endpoint(), stream).await
    }

    pub async fn try_update_stream(&self, update: &StreamUpdate) -> Result<Value, StreamsError> {
        update.validate()?;
        require_id(&update.id, "updateStream requires an id")?;
        self.send_update(&self.stream_endpoint(&update.id), update)
            .await
    }

    /// `Ok(())` only when the server answered `204 No Content`.
    pub async fn try_expire_stream(&self, id: &str) -> Result<(), StreamsError> {
        require_id(id, "Must provide a stream id")?;
        self.send_expire(&self.stream_endpoint(id)).await
    }

    // ========================================================================
    // Round trips
    // ========================================================================

    fn collection_endpoint(&self) -> String {
        format!("{}/streams", self.config.trimmed_base_url())
    }

    fn stream_endpoint(&self, id: &str) -> String {
        format!(
            "{}/streams/{}",
            self.config.trimmed_base_url(),
            urlencoding::encode(id)
        )
    }

    async fn fetch_records(
        &self,
        endpoint: &str,
        query: Option<&StreamQuery>,
    ) -> Result<Vec<StreamRecord>, StreamsError> {
        debug!(method = "GET", endpoint = %endpoint, "Sending streams request");
        let mut request = self.http_client.get(endpoint);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            request = request.query(query.pairs());
        }
        let response = request.send().await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(StreamsError::from_response_body(status.as_u16(), &text));
        }
        let body = parse_json_body(&text)?;
        let data = body.get("data").ok_or_else(|| {
            StreamsError::ParseError("response body has no `data` member".to_string())
        })?;
        map_stream_records(data)
    }

    async fn send_create(
        &self,
        endpoint: &str,
        stream: &NewStream,
    ) -> Result<CreatedStream, StreamsError> {
        let body = serde_json::to_vec(stream)?;
        debug!(method = "POST", endpoint = %endpoint, "Sending streams request");
        let response = self
            .http_client
            .post(endpoint)
            .headers(self.auth_headers.clone())
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        let data = data_member(parse_json_body(&text)?);
        Ok(CreatedStream { status, data })
    }

    async fn send_update(&self, endpoint: &str, update: &StreamUpdate) -> Result<Value, StreamsError> {
        let body = serde_json::to_vec(update)?;
        debug!(method = "PATCH", endpoint = %endpoint, "Sending streams request");
        let response = self
            .http_client
            .patch(endpoint)
            .headers(self.auth_headers.clone())
            .body(body)
            .send()
            .await?;

        let text = response.text().await?;
        Ok(data_member(parse_json_body(&text)?))
    }

    async fn send_expire(&self, endpoint: &str) -> Result<(), StreamsError> {
        debug!(method = "DELETE", endpoint = %endpoint, "Sending streams request");
        let response = self
            .http_client
            .delete(endpoint)
            .headers(self.auth_headers.clone())
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(());
        }
        let text = response.text().await.unwrap_or_default();
        Err(StreamsError::from_response_body(status.as_u16(), &text))
    }
}

#[async_trait]
impl StreamsCapability for StreamsClient {
    async fn get_stream_data(&self, id: &str) -> Result<Vec<StreamRecord>, StreamsError> {
        StreamsClient::get_stream_data(self, id).await
    }

    async fn get_streams_data(&self, query: &StreamQuery) -> Vec<StreamRecord> {
        StreamsClient::get_streams_data(self, query).await
    }

    async fn create_stream(
        &self,
        stream: &NewStream,
    ) -> Result<Option<CreatedStream>, StreamsError> {
        StreamsClient::create_stream(self, stream).await
    }

    async fn update_stream(&self, update: &StreamUpdate) -> Result<Option<Value>, StreamsError> {
        StreamsClient::update_stream(self, update).await
    }

    async fn expire_stream(&self, id: &str) -> Result<bool, StreamsError> {
        StreamsClient::expire_stream(self, id).await
    }
}

fn require_id(id: &str, message: &str) -> Result<(), StreamsError> {
    if id.trim().is_empty() {
        return Err(StreamsError::ValidationError(message.to_string()));
    }
    Ok(())
}

fn parse_json_body(text: &str) -> Result<Value, StreamsError> {
    serde_json::from_str(text)
        .map_err(|e| StreamsError::ParseError(format!("response body is not JSON: {e}")))
}

/// The body's `data` member; `Null` when the member is missing.
fn data_member(body: Value) -> Value {
    match body {
        Value::Object(mut map) => map.remove("data").unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;
    use serde_json::json;

    #[test]
    fn new_without_token_fails() {
        let err = StreamsClient::new("", None).unwrap_err();
        assert!(matches!(err, StreamsError::ConfigurationError(_)));
    }

    #[test]
    fn new_without_base_url_uses_default() {
        let client = StreamsClient::new("jwt", None).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        let client = StreamsClient::new("jwt", Some("")).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn endpoints_are_built_from_trimmed_base() {
        let client = StreamsClient::new("jwt", Some("http://localhost:3000/")).unwrap();
        assert_eq!(client.collection_endpoint(), "http://localhost:3000/streams");
        assert_eq!(client.stream_endpoint("7"), "http://localhost:3000/streams/7");
        assert_eq!(
            client.stream_endpoint("a/b c"),
            "http://localhost:3000/streams/a%2Fb%20c"
        );
    }

    #[test]
    fn auth_headers_are_prebuilt() {
        let client = StreamsClient::new("jwt", None).unwrap();
        assert_eq!(
            client.auth_headers.get("authorization").unwrap(),
            "Bearer jwt"
        );
        assert_eq!(
            client.auth_headers.get("content-type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn debug_hides_token() {
        let client = StreamsClient::new("very-secret-jwt", None).unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("very-secret-jwt"));
        assert!(rendered.contains("has_token: true"));
    }

    #[test]
    fn data_member_extraction() {
        assert_eq!(data_member(json!({ "data": { "id": "7" } })), json!({ "id": "7" }));
        assert_eq!(data_member(json!({ "errors": [] })), Value::Null);
        assert_eq!(data_member(json!([1, 2])), Value::Null);
    }

    #[test]
    fn require_id_rejects_blank() {
        assert!(require_id("", "x").is_err());
        assert!(require_id("  ", "x").is_err());
        assert!(require_id("7", "x").is_ok());
    }

    #[tokio::test]
    async fn validation_errors_surface_before_io() {
        // Port 9 is discard; nothing is sent because validation fails first.
        let client = StreamsClient::new("jwt", Some("http://127.0.0.1:9")).unwrap();
        assert!(matches!(
            client.get_stream_data("").await,
            Err(StreamsError::ValidationError(_))
        ));
        assert!(matches!(
            client.create_stream(&NewStream::default()).await,
            Err(StreamsError::ValidationError(_))
        ));
        assert!(matches!(
            client.update_stream(&StreamUpdate::default()).await,
            Err(StreamsError::ValidationError(_))
        ));
        assert!(matches!(
            client.expire_stream("").await,
            Err(StreamsError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn blank_ids_are_rejected_on_every_id_path() {
        let client = StreamsClient::new("jwt", Some("http://127.0.0.1:9")).unwrap();
        let blank = "   ";
        assert!(matches!(
            client.get_stream_data(blank).await,
            Err(StreamsError::ValidationError(_))
        ));
        assert!(matches!(
            client.update_stream(&StreamUpdate::new(blank).with_status("live")).await,
            Err(StreamsError::ValidationError(_))
        ));
        assert!(matches!(
            client.try_update_stream(&StreamUpdate::new(blank)).await,
            Err(StreamsError::ValidationError(_))
        ));
        assert!(matches!(
            client.expire_stream(blank).await,
            Err(StreamsError::ValidationError(_))
        ));
    }
}
