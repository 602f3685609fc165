//! Shared helpers for gateway integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use anstruct_gateway::error::GatewayResult;
use anstruct_gateway::{GenerateContentRequest, GenerativeUpstream, UpstreamReply};
use async_trait::async_trait;
use axum::Router;
use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use tokio::net::TcpListener;

pub const TREE_OUTPUT_BODY: &str =
    r#"{"candidates":[{"content":{"parts":[{"text":"tree output"}]}}]}"#;

/// Upstream that returns a canned reply and records every payload.
pub struct RecordingUpstream {
    reply: UpstreamReply,
    calls: Mutex<Vec<GenerateContentRequest>>,
}

impl RecordingUpstream {
    pub fn new(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: UpstreamReply::new(status, body),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<GenerateContentRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeUpstream for RecordingUpstream {
    async fn generate_content(
        &self,
        payload: &GenerateContentRequest,
    ) -> GatewayResult<UpstreamReply> {
        self.calls.lock().unwrap().push(payload.clone());
        Ok(self.reply.clone())
    }
}

/// A request as seen by a fake server.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: Bytes,
}

/// Fake HTTP server that answers every request with one canned response.
#[derive(Clone)]
pub struct FakeServer {
    status: StatusCode,
    body: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl FakeServer {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
            captured: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn captured(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }

    /// Serve on an ephemeral local port and return the base URL.
    pub async fn start(&self) -> String {
        let app = Router::new().fallback(capture).with_state(self.clone());
        let addr = spawn(app).await;
        format!("http://{addr}")
    }
}

async fn capture(
    State(server): State<FakeServer>,
    method: Method,
    uri: Uri,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    server.captured.lock().unwrap().push(CapturedRequest {
        method,
        path: uri.path().to_string(),
        query,
        content_type,
        body,
    });

    (server.status, server.body.clone())
}

/// Serve `app` on an ephemeral local port.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
