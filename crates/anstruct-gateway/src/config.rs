//! Public configuration for the forwarding gateway.
//!
//! The provider key is injected here once, at construction time, and handed
//! to the upstream client. Nothing else in the crate reads the environment.

use std::fmt;

/// Base URL of the Gemini API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used for blueprint generation.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Provider API key.
///
/// `Debug` and `Display` never print the secret, so the key can sit inside
/// structs that are logged.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for the one place that has to put it on the wire.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Configuration for the gateway's upstream calls.
///
/// # Example
///
/// ```
/// use anstruct_gateway::GatewayConfig;
///
/// let config = GatewayConfig::new("secret").with_model("gemini-2.5-pro");
/// assert_eq!(
///     config.generate_content_url(),
///     "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-pro:generateContent"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub(crate) api_key: ApiKey,
    pub(crate) base_url: String,
    pub(crate) model: String,
}

impl GatewayConfig {
    /// Create a configuration pointing at the public Gemini endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: ApiKey::new(api_key),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Override the API base URL (scheme and host, optionally a path prefix).
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the model name.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full `generateContent` URL, without the key query parameter.
    #[must_use]
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}
