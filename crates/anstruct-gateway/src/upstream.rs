//! Upstream abstraction for the Gemini API.
//!
//! The gateway talks to the provider through `GenerativeUpstream` so the
//! request flow can be exercised without a network. The production
//! implementation uses reqwest.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::models::GenerateContentRequest;

/// Raw upstream answer: status plus body text, not yet interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

impl UpstreamReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Port for sending one `generateContent` call.
///
/// Implementations make exactly one attempt. Transport failures are
/// returned as `GatewayError::Network`; any HTTP status, including error
/// statuses, comes back as an `UpstreamReply`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerativeUpstream: Send + Sync {
    async fn generate_content(
        &self,
        payload: &GenerateContentRequest,
    ) -> GatewayResult<UpstreamReply>;
}

/// Gemini upstream backed by a pooled reqwest client.
///
/// No timeout is set on the client; the call lasts as long as the caller's
/// connection does.
pub struct ReqwestUpstream {
    client: Client,
    config: GatewayConfig,
}

impl ReqwestUpstream {
    /// Create an upstream with its own connection pool.
    pub fn new(config: GatewayConfig) -> GatewayResult<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(10)
            .build()
            .map_err(GatewayError::network)?;
        Ok(Self::with_client(client, config))
    }

    /// Create an upstream that shares an existing client.
    #[must_use]
    pub fn with_client(client: Client, config: GatewayConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl GenerativeUpstream for ReqwestUpstream {
    async fn generate_content(
        &self,
        payload: &GenerateContentRequest,
    ) -> GatewayResult<UpstreamReply> {
        let url = self.config.generate_content_url();
        debug!(upstream = %url, model = %self.config.model(), "Calling generateContent");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key().expose())])
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(GatewayError::network)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(GatewayError::network)?;

        Ok(UpstreamReply { status, body })
    }
}
