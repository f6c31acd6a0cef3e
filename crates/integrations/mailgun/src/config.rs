use serde::{Deserialize, Serialize};

/// Default base URL of the Mailgun v3 API (US region).
pub const DEFAULT_API_BASE_URL: &str = "https://api.mailgun.net/v3";

/// Configuration for the Mailgun sender.
#[derive(Clone, Serialize, Deserialize)]
pub struct MailgunConfig {
    /// Mailgun API key, sent as the password of HTTP Basic auth (user `api`).
    pub api_key: String,

    /// Sending domain registered with Mailgun (e.g. `mg.example.com`).
    pub domain: String,

    /// Default "from" address.
    pub from_address: String,

    /// Default display name used in the `from` header.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Base URL for the Mailgun API. Override this for testing against a
    /// mock server, or to target the EU region.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_owned()
}

impl std::fmt::Debug for MailgunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailgunConfig")
            .field("api_key", &"[REDACTED]")
            .field("domain", &self.domain)
            .field("from_address", &self.from_address)
            .field("display_name", &self.display_name)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl MailgunConfig {
    /// Create a new configuration for the given API key, sending domain, and
    /// default from-address.
    ///
    /// Uses the default Mailgun API base URL (`https://api.mailgun.net/v3`).
    pub fn new(
        api_key: impl Into<String>,
        domain: impl Into<String>,
        from_address: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            domain: domain.into(),
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
