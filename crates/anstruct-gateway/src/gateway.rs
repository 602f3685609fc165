//! The forwarding gateway: validate, forward, unwrap.

use std::sync::Arc;

use axum::http::Method;
use serde_json::Value;
use tracing::{error, info};

use crate::error::{GatewayError, GatewayResult};
use crate::extract::extract_blueprint;
use crate::models::{BlueprintResponse, GenerateContentRequest};
use crate::upstream::GenerativeUpstream;

/// Forwards one prompt per call to the configured upstream.
///
/// Holds no per-request state; a single instance is shared by every
/// in-flight request.
#[derive(Clone)]
pub struct Gateway {
    upstream: Arc<dyn GenerativeUpstream>,
}

impl Gateway {
    pub fn new(upstream: Arc<dyn GenerativeUpstream>) -> Self {
        Self { upstream }
    }

    /// Handle one inbound call.
    ///
    /// Checks run in a fixed order: method, body JSON, prompt. The upstream
    /// is called only once all three pass.
    pub async fn handle(&self, method: &Method, body: &[u8]) -> GatewayResult<BlueprintResponse> {
        if *method != Method::POST {
            return Err(GatewayError::MethodNotAllowed);
        }

        let prompt = parse_prompt(body)?;
        info!(prompt = %prompt, "Prompt received");

        let payload = GenerateContentRequest::blueprint(prompt);
        let reply = self.upstream.generate_content(&payload).await?;
        info!(status = reply.status, "Upstream responded");

        if !reply.is_success() {
            error!(status = reply.status, body = %reply.body, "Upstream error");
            return Err(GatewayError::Upstream {
                status: reply.status,
                body: reply.body,
            });
        }

        let response: Value = serde_json::from_str(&reply.body).map_err(GatewayError::Decode)?;
        Ok(BlueprintResponse {
            blueprint: extract_blueprint(&response),
        })
    }
}

/// Pull a non-empty string `prompt` out of an inbound body.
///
/// A body that is not JSON at all is an `InvalidBody` and a bare `null` is a
/// `NullBody`; both take the catch-all path. Any other JSON without a usable
/// prompt is a `MissingPrompt`.
pub fn parse_prompt(body: &[u8]) -> GatewayResult<String> {
    let value: Value = serde_json::from_slice(body).map_err(GatewayError::InvalidBody)?;
    if value.is_null() {
        return Err(GatewayError::NullBody);
    }

    value
        .get("prompt")
        .and_then(Value::as_str)
        .filter(|prompt| !prompt.is_empty())
        .map(str::to_string)
        .ok_or(GatewayError::MissingPrompt)
}
