use serde::{Deserialize, Serialize};

use crate::error::SmtpError;

/// SMTP sender configuration.
///
/// Holds everything needed to reach and authenticate against an SMTP server,
/// plus the sender's default identity.
///
/// # Examples
///
/// ```
/// use courier_smtp::SmtpConfig;
///
/// let config = SmtpConfig::new("smtp.example.com", 587, "user", "secret", "noreply@example.com");
/// assert!(config.enable_ssl);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    /// SMTP server hostname.
    pub server: String,

    /// SMTP server port. Defaults to 587 (STARTTLS submission port).
    #[serde(default = "default_port")]
    pub port: u16,

    /// SMTP username.
    pub user_name: String,

    /// SMTP password.
    pub password: String,

    /// Default "from" address.
    pub from_address: String,

    /// Default display name used in the `From` header.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Whether to upgrade the connection with STARTTLS. Defaults to `true`.
    #[serde(default = "default_enable_ssl")]
    pub enable_ssl: bool,
}

fn default_port() -> u16 {
    587
}

fn default_enable_ssl() -> bool {
    true
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("user_name", &self.user_name)
            .field("password", &"[REDACTED]")
            .field("from_address", &self.from_address)
            .field("display_name", &self.display_name)
            .field("enable_ssl", &self.enable_ssl)
            .finish()
    }
}

impl SmtpConfig {
    /// Create a new configuration. STARTTLS is enabled by default.
    pub fn new(
        server: impl Into<String>,
        port: u16,
        user_name: impl Into<String>,
        password: impl Into<String>,
        from_address: impl Into<String>,
    ) -> Self {
        Self {
            server: server.into(),
            port,
            user_name: user_name.into(),
            password: password.into(),
            from_address: from_address.into(),
            display_name: None,
            enable_ssl: true,
        }
    }

    /// Set the default display name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Set whether STARTTLS should be used.
    #[must_use]
    pub fn with_ssl(mut self, enable_ssl: bool) -> Self {
        self.enable_ssl = enable_ssl;
        self
    }

    /// Check the connection settings.
    ///
    /// Fields are checked in order (server, user name, password, port) and the
    /// first failure is returned as [`SmtpError::InvalidConfiguration`]
    /// carrying a copy of this configuration. Whitespace-only values count as
    /// empty; port `0` is rejected.
    pub fn validate(&self) -> Result<(), SmtpError> {
        if self.server.trim().is_empty() {
            return Err(self.invalid("server", "server cannot be empty"));
        }
        if self.user_name.trim().is_empty() {
            return Err(self.invalid("user_name", "user_name cannot be empty"));
        }
        if self.password.trim().is_empty() {
            return Err(self.invalid("password", "password cannot be empty"));
        }
        if self.port == 0 {
            return Err(self.invalid("port", "port must be a valid port number"));
        }
        Ok(())
    }

    fn invalid(&self, field: &'static str, message: &str) -> SmtpError {
        SmtpError::InvalidConfiguration {
            config: Box::new(self.clone()),
            field,
            message: message.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> SmtpConfig {
        SmtpConfig::new("smtp.example.com", 587, "user", "pass", "a@example.com")
    }

    fn invalid_field(config: &SmtpConfig) -> &'static str {
        match config.validate() {
            Err(SmtpError::InvalidConfiguration { field, .. }) => field,
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn new_config_defaults() {
        let config = valid_config();
        assert_eq!(config.server, "smtp.example.com");
        assert_eq!(config.port, 587);
        assert!(config.enable_ssl);
        assert!(config.display_name.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let config = valid_config().with_display_name("A").with_ssl(false);
        assert_eq!(config.display_name.as_deref(), Some("A"));
        assert!(!config.enable_ssl);
    }

    #[test]
    fn empty_server_is_rejected() {
        let mut config = valid_config();
        config.server = String::new();
        assert_eq!(invalid_field(&config), "server");

        config.server = "   ".into();
        assert_eq!(invalid_field(&config), "server");
    }

    #[test]
    fn empty_user_name_is_rejected() {
        let mut config = valid_config();
        config.user_name = String::new();
        assert_eq!(invalid_field(&config), "user_name");
    }

    #[test]
    fn empty_password_is_rejected() {
        let mut config = valid_config();
        config.password = "\t".into();
        assert_eq!(invalid_field(&config), "password");
    }

    #[test]
    fn port_zero_is_rejected() {
        let mut config = valid_config();
        config.port = 0;
        assert_eq!(invalid_field(&config), "port");
    }

    #[test]
    fn full_port_range_is_accepted() {
        for port in [1, 25, 465, 587, 2525, 65535] {
            let mut config = valid_config();
            config.port = port;
            assert!(config.validate().is_ok(), "port {port} should be valid");
        }
    }

    #[test]
    fn server_is_checked_first() {
        let config = SmtpConfig::new("", 0, "", "", "a@example.com");
        assert_eq!(invalid_field(&config), "server");
    }

    #[test]
    fn invalid_configuration_carries_config() {
        let mut config = valid_config();
        config.user_name = String::new();
        let Err(SmtpError::InvalidConfiguration {
            config: carried,
            message,
            ..
        }) = config.validate()
        else {
            panic!("expected InvalidConfiguration");
        };
        assert_eq!(carried.server, "smtp.example.com");
        assert!(carried.user_name.is_empty());
        assert_eq!(message, "user_name cannot be empty");
    }

    #[test]
    fn config_serde_roundtrip() {
        let config = valid_config().with_display_name("A").with_ssl(false);
        let json = serde_json::to_string(&config).unwrap();
        let back: SmtpConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.server, "smtp.example.com");
        assert_eq!(back.display_name.as_deref(), Some("A"));
        assert!(!back.enable_ssl);
    }

    #[test]
    fn deserialize_applies_defaults() {
        let json = serde_json::json!({
            "server": "smtp.example.com",
            "user_name": "user",
            "password": "pass",
            "from_address": "a@example.com"
        });
        let config: SmtpConfig = serde_json::from_value(json).unwrap();
        assert_eq!(config.port, 587);
        assert!(config.enable_ssl);
    }

    #[test]
    fn debug_redacts_password() {
        let config =
            SmtpConfig::new("smtp.example.com", 587, "user", "test-pw-placeholder", "a@example.com");
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"), "password must be redacted");
        assert!(
            !debug.contains("test-pw-placeholder"),
            "password must not appear in debug output"
        );
        assert!(
            debug.contains("smtp.example.com"),
            "non-secret fields should be visible"
        );
    }
}
