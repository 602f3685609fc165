//! Gateway error type and its HTTP mapping.
//!
//! Every failure in a gateway call is one of these variants. The handler
//! never inspects anything else to pick a response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Prefix of every catch-all response body.
pub const INTERNAL_ERROR_PREFIX: &str = "Internal Server Error: ";

/// Result type alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors that end a gateway call.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Inbound method was not POST.
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Inbound body had no non-empty string `prompt`.
    #[error("Missing 'prompt' in request body")]
    MissingPrompt,

    /// Upstream answered with a non-2xx status. Relayed as-is.
    #[error("upstream returned status {status}")]
    Upstream {
        /// Upstream HTTP status code
        status: u16,
        /// Raw upstream body
        body: String,
    },

    /// Inbound body could not be read off the connection.
    #[error("failed to read request body: {0}")]
    BodyRead(#[source] axum::Error),

    /// Inbound body was not JSON.
    #[error("invalid JSON in request body: {0}")]
    InvalidBody(#[source] serde_json::Error),

    /// Inbound body was the JSON literal `null`, which has no fields to read.
    #[error("cannot read 'prompt' from a null request body")]
    NullBody,

    /// Upstream could not be reached, or its body could not be read.
    ///
    /// The wrapped error has had its URL removed; the URL carries the key.
    #[error("upstream request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// Upstream answered 2xx with a body that is not JSON.
    #[error("invalid JSON from upstream: {0}")]
    Decode(#[source] serde_json::Error),
}

impl GatewayError {
    /// Build a network error, stripping the request URL.
    pub fn network(err: reqwest::Error) -> Self {
        Self::Network(err.without_url())
    }

    /// Whether this error went through the catch-all path.
    #[must_use]
    pub const fn is_unexpected(&self) -> bool {
        matches!(
            self,
            Self::BodyRead(_)
                | Self::InvalidBody(_)
                | Self::NullBody
                | Self::Network(_)
                | Self::Decode(_)
        )
    }

    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingPrompt => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::BodyRead(_)
            | Self::InvalidBody(_)
            | Self::NullBody
            | Self::Network(_)
            | Self::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Upstream { body, .. } => body,
            other if other.is_unexpected() => format!("{INTERNAL_ERROR_PREFIX}{other}"),
            other => other.to_string(),
        };

        (status, body).into_response()
    }
}
