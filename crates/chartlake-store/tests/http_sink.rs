//! Integration tests for `HttpObjectSink` using wiremock HTTP mocks.

use chartlake_store::{HttpObjectSink, ObjectSink, StoreError};
use wiremock::matchers::{body_bytes, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn put_object_puts_body_at_bucket_key_path() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(
            "/chart-datalake/top100tracks/billboard_top100_2024-01-01.json",
        ))
        .and(header("content-type", "application/json"))
        .and(body_bytes(br#"[{"rank":1}]"#.to_vec()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let sink = HttpObjectSink::new(&server.uri(), None).unwrap();
    sink.put_object(
        "chart-datalake",
        "top100tracks/billboard_top100_2024-01-01.json",
        br#"[{"rank":1}]"#,
    )
    .await
    .expect("put should succeed");
}

#[tokio::test]
async fn put_object_sends_bearer_token_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(header("authorization", "Bearer lake-token"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let sink = HttpObjectSink::new(&server.uri(), Some("lake-token")).unwrap();
    sink.put_object("bucket", "key.json", b"{}")
        .await
        .expect("put should succeed");
}

#[tokio::test]
async fn put_object_omits_authorization_without_token() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let sink = HttpObjectSink::new(&server.uri(), None).unwrap();
    sink.put_object("bucket", "key.json", b"{}")
        .await
        .expect("put should succeed");
}

#[tokio::test]
async fn put_object_rejected_write_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let sink = HttpObjectSink::new(&server.uri(), None).unwrap();
    let err = sink
        .put_object("bucket", "key.json", b"{}")
        .await
        .unwrap_err();
    assert!(
        matches!(err, StoreError::UnexpectedStatus { status: 403, .. }),
        "expected UnexpectedStatus(403), got: {err:?}"
    );
}
