//! Tests for the reqwest-backed upstream and the full HTTP path, against a
//! local fake of the Gemini endpoint.

mod common;

use std::sync::Arc;

use anstruct_gateway::{
    Gateway, GatewayConfig, GatewayError, GenerateContentRequest, GenerativeUpstream,
    ReqwestUpstream, router,
};
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use common::{FakeServer, TREE_OUTPUT_BODY, closed_addr};

const KEY: &str = "test-key-123";

fn upstream_for(base_url: &str) -> ReqwestUpstream {
    ReqwestUpstream::new(GatewayConfig::new(KEY).with_base_url(base_url)).unwrap()
}

#[tokio::test]
async fn sends_generate_content_request() {
    let fake = FakeServer::new(200, TREE_OUTPUT_BODY);
    let base_url = fake.start().await;

    let payload = GenerateContentRequest::blueprint("hello");
    let reply = upstream_for(&base_url)
        .generate_content(&payload)
        .await
        .unwrap();

    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, TREE_OUTPUT_BODY);

    let captured = fake.captured();
    assert_eq!(captured.len(), 1);
    let request = &captured[0];
    assert_eq!(request.method, Method::POST);
    assert_eq!(
        request.path,
        "/v1beta/models/gemini-2.5-flash:generateContent"
    );
    assert_eq!(request.query.as_deref(), Some("key=test-key-123"));
    assert_eq!(request.content_type.as_deref(), Some("application/json"));

    let sent: GenerateContentRequest = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(sent, payload);
}

#[tokio::test]
async fn error_status_comes_back_as_reply() {
    let fake = FakeServer::new(503, "overloaded");
    let base_url = fake.start().await;

    let reply = upstream_for(&base_url)
        .generate_content(&GenerateContentRequest::blueprint("hello"))
        .await
        .unwrap();

    assert_eq!(reply.status, 503);
    assert_eq!(reply.body, "overloaded");
}

#[tokio::test]
async fn unreachable_upstream_is_network_error_without_key() {
    let base_url = format!("http://{}", closed_addr().await);

    let err = upstream_for(&base_url)
        .generate_content(&GenerateContentRequest::blueprint("hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Network(_)));
    assert!(!err.to_string().contains(KEY));
}

#[tokio::test]
async fn gateway_relays_rate_limit_end_to_end() {
    let fake = FakeServer::new(429, "rate limited");
    let base_url = fake.start().await;
    let app = router(Arc::new(Gateway::new(Arc::new(upstream_for(&base_url)))));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/generate")
                .body(Body::from(r#"{"prompt":"hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"rate limited");
}

#[tokio::test]
async fn gateway_network_failure_is_internal_server_error() {
    let base_url = format!("http://{}", closed_addr().await);
    let app = router(Arc::new(Gateway::new(Arc::new(upstream_for(&base_url)))));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/")
                .body(Body::from(r#"{"prompt":"hello"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.starts_with("Internal Server Error: "));
    assert!(!text.contains(KEY));
}
