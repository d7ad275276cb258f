//! Failure logging tests
//!
//! The documented operations swallow round-trip failures. These tests make
//! sure each swallowed failure is still logged with its endpoint and ids.

mod support;

use mockito::Matcher;
use streamsource::prelude::*;
use tracing_test::traced_test;

#[tokio::test]
#[traced_test]
async fn get_stream_failure_is_logged_with_endpoint_and_id() {
    let mut server = support::mockito::start().await;
    let mock =
        support::mockito::json_mock(&mut server, "GET", "/streams/42", 500, r#"{"error":"boom"}"#)
            .await;

    let client = StreamsClient::new("jwt", Some(&support::mockito::url(&server))).unwrap();
    assert!(client.get_stream_data("42").await.unwrap().is_empty());

    mock.assert_async().await;
    assert!(logs_contain("Could not fetch stream"));
    assert!(logs_contain("/streams/42"));
    assert!(logs_contain("boom"));
}

#[tokio::test]
#[traced_test]
async fn get_streams_failure_is_logged() {
    let mut server = support::mockito::start().await;
    let mock = server
        .mock("GET", support::mockito::regex(r"^/streams(\?.*)?$"))
        .match_query(Matcher::UrlEncoded("status".into(), "live".into()))
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = StreamsClient::new("jwt", Some(&support::mockito::url(&server))).unwrap();
    let query = StreamQuery::new().param("status", "live");
    assert!(client.get_streams_data(&query).await.is_empty());

    mock.assert_async().await;
    assert!(logs_contain("Could not fetch streams"));
    assert!(logs_contain("response body is not JSON"));
}

#[tokio::test]
#[traced_test]
async fn create_failure_logs_request_body() {
    let mut server = support::mockito::start().await;
    let mock = support::mockito::status_mock(&mut server, "POST", "/streams", 502).await;

    let client = StreamsClient::new("jwt", Some(&support::mockito::url(&server))).unwrap();
    let created = client
        .create_stream(&NewStream::new("https://twitch.tv/logged").with_city("Austin"))
        .await
        .unwrap();
    assert!(created.is_none());

    mock.assert_async().await;
    assert!(logs_contain("Error creating stream"));
    assert!(logs_contain("https://twitch.tv/logged"));
    assert!(logs_contain("Austin"));
}

#[tokio::test]
#[traced_test]
async fn update_failure_logs_id() {
    let mut server = support::mockito::start().await;
    let mock = support::mockito::status_mock(&mut server, "PATCH", "/streams/31", 500).await;

    let client = StreamsClient::new("jwt", Some(&support::mockito::url(&server))).unwrap();
    let result = client
        .update_stream(&StreamUpdate::new("31").with_status("offline"))
        .await
        .unwrap();
    assert!(result.is_none());

    mock.assert_async().await;
    assert!(logs_contain("Error updating stream"));
    assert!(logs_contain("id=31"));
}

#[tokio::test]
#[traced_test]
async fn expire_non_204_is_logged_and_false() {
    let mut server = support::mockito::start().await;
    let mock = server
        .mock("DELETE", "/streams/5")
        .match_header("authorization", "Bearer jwt")
        .with_status(404)
        .create_async()
        .await;

    let client = StreamsClient::new("jwt", Some(&support::mockito::url(&server))).unwrap();
    assert!(!client.expire_stream("5").await.unwrap());

    mock.assert_async().await;
    assert!(logs_contain("Error expiring stream"));
    assert!(logs_contain("404"));
}

#[tokio::test]
#[traced_test]
async fn successful_expire_logs_no_error() {
    let mut server = support::mockito::start().await;
    let mock = support::mockito::status_mock(&mut server, "DELETE", "/streams/6", 204).await;

    let client = StreamsClient::new("jwt", Some(&support::mockito::url(&server))).unwrap();
    assert!(client.expire_stream("6").await.unwrap());

    mock.assert_async().await;
    assert!(!logs_contain("Error expiring stream"));
}

#[tokio::test]
#[traced_test]
async fn validation_errors_are_not_logged() {
    let client = StreamsClient::new("jwt", Some("http://127.0.0.1:1")).unwrap();
    assert!(client.expire_stream("").await.is_err());
    assert!(!logs_contain("Error expiring stream"));
}
