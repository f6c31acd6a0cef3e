use serde::{Deserialize, Serialize};

/// Default base URL of the SendGrid API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.sendgrid.com";

/// Configuration for the SendGrid sender.
#[derive(Clone, Serialize, Deserialize)]
pub struct SendGridConfig {
    /// SendGrid API key, sent as a bearer token.
    pub api_key: String,

    /// Default "from" address.
    pub from_address: String,

    /// Default display name for the sender.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Base URL for the SendGrid API. Override this for testing against a
    /// mock server.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_owned()
}

impl std::fmt::Debug for SendGridConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendGridConfig")
            .field("api_key", &"[REDACTED]")
            .field("from_address", &self.from_address)
            .field("display_name", &self.display_name)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl SendGridConfig {
    /// Create a new configuration with the given API key and default
    /// from-address.
    pub fn new(api_key: impl Into<String>, from_address: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            from_address: from_address.into(),
            display_name: None,
            api_base_url: default_api_base_url(),
        }
    }

    /// Set the default display name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Override the API base URL (useful for testing).
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}
