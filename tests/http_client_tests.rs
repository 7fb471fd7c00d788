//! Integration tests for the reqwest-backed transport.
//!
//! These tests verify URL construction, default headers, and response
//! collection of [`HttpClient`] against a mock service.

use std::time::Duration;

use smis::clients::{HttpClient, Transport};
use smis::{Endpoint, HttpError, ServiceConfig};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_config(endpoint: &str) -> ServiceConfig {
    ServiceConfig::builder()
        .endpoint(Endpoint::new(endpoint).unwrap())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_joins_endpoint_and_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":7}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_config(&format!("{}/api", server.uri()))).unwrap();
    let response = client.get("projects/7").await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body, r#"{"id":7}"#);
    assert_eq!(response.url, format!("{}/api/projects/7", server.uri()));
}

#[tokio::test]
async fn test_endpoint_trailing_slash_is_not_doubled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_config(&format!("{}/api/", server.uri()))).unwrap();
    let response = client.get("/projects").await.unwrap();

    assert_eq!(response.url, format!("{}/api/projects", server.uri()));
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .and(header("Accept", "application/json"))
        .and(header("X-Tenant", "acme"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let config = ServiceConfig::builder()
        .endpoint(Endpoint::new(format!("{}/api", server.uri())).unwrap())
        .header("X-Tenant", "acme")
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();

    let response = client.get("").await.unwrap();
    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_error_status_is_returned_as_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/forbidden"))
        .respond_with(
            ResponseTemplate::new(403)
                .insert_header("X-Request-Id", "abc-123")
                .set_body_string(r#"{"error":"forbidden"}"#),
        )
        .mount(&server)
        .await;

    let client = HttpClient::new(&create_config(&format!("{}/api", server.uri()))).unwrap();
    let response = client.get("forbidden").await.unwrap();

    assert_eq!(response.code, 403);
    assert_eq!(response.request_id(), Some("abc-123"));

    let error = response.raise_for_status().unwrap_err();
    assert_eq!(error.code, 403);
    assert!(error.message.starts_with("403 Client Error: Forbidden"));
}

#[tokio::test]
async fn test_timeout_surfaces_as_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = ServiceConfig::builder()
        .endpoint(Endpoint::new(format!("{}/api", server.uri())).unwrap())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();

    let result = client.get("slow").await;
    assert!(matches!(result, Err(HttpError::Network(_))));
}

#[test]
fn test_types_exported_at_crate_root() {
    let _: fn(smis::HttpClient) = |_| {};
    let _: fn(smis::HttpResponse) = |_| {};
    let _: fn(smis::HttpError) = |_| {};
    let _: fn(smis::Client) = |_| {};
}
