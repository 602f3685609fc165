//! Caller-side client for a running gateway.
//!
//! This is what the anstruct CLI uses to turn a natural-language prompt into
//! blueprint text. It speaks only the `{"prompt"}` / `{"blueprint"}` contract
//! and knows nothing about the provider behind the gateway.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::PromptRequest;

/// Hosted gateway used when no endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "https://anstruct-ai-proxy.anstruct.workers.dev/generate";

/// Default request timeout for the client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors returned by [`BlueprintClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("prompt cannot be empty")]
    EmptyPrompt,

    #[error("request to gateway failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("gateway error: {status} ({body})")]
    Status { status: u16, body: String },

    #[error("failed to decode gateway response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("gateway returned error: {0}")]
    Remote(String),

    #[error("empty blueprint returned")]
    EmptyBlueprint,
}

/// Gateway reply as seen by the client. `error` is tolerated for gateways
/// that report failures in-band.
#[derive(Debug, Deserialize)]
struct GatewayReply {
    #[serde(default)]
    blueprint: String,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for a blueprint gateway.
#[derive(Debug, Clone)]
pub struct BlueprintClient {
    client: Client,
    endpoint: String,
}

impl BlueprintClient {
    /// Create a client with the default timeout.
    pub fn new(endpoint: impl Into<String>) -> ClientResult<Self> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> ClientResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `prompt` to the gateway and return the blueprint text.
    pub async fn generate_blueprint(&self, prompt: &str) -> ClientResult<String> {
        if prompt.is_empty() {
            return Err(ClientError::EmptyPrompt);
        }

        debug!(endpoint = %self.endpoint, "Requesting blueprint");
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(&PromptRequest {
                prompt: prompt.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != reqwest::StatusCode::OK {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply: GatewayReply = serde_json::from_str(&body)?;
        if let Some(message) = reply.error.filter(|m| !m.is_empty()) {
            return Err(ClientError::Remote(message));
        }
        if reply.blueprint.is_empty() {
            return Err(ClientError::EmptyBlueprint);
        }

        Ok(reply.blueprint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_prompt_is_rejected_locally() {
        // Nothing listens here; an attempted request would be an Http error.
        let client = BlueprintClient::new("http://127.0.0.1:9/generate").unwrap();
        let err = client.generate_blueprint("").await.unwrap_err();
        assert!(matches!(err, ClientError::EmptyPrompt));
    }

    #[test]
    fn test_endpoint_is_kept() {
        let client = BlueprintClient::new("http://127.0.0.1:8787/generate").unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:8787/generate");
    }

    #[test]
    fn test_reply_tolerates_missing_fields() {
        let reply: GatewayReply = serde_json::from_str("{}").unwrap();
        assert!(reply.blueprint.is_empty());
        assert!(reply.error.is_none());
    }
}
