use std::time::Duration;

use courier_core::{CancellationToken, DefaultIdentity, EmailAddress, EmailSender};
use reqwest::Client;
use tracing::{debug, error, info, instrument, warn};

use crate::config::MailgunConfig;
use crate::error::MailgunError;
use crate::types::{MailgunResponse, MailgunSendRequest};

/// Mailgun sender that delivers plain-text email via the messages API.
///
/// Implements [`EmailSender`], so it also works behind
/// [`DynEmailSender`](courier_core::DynEmailSender) and
/// [`BlockingSender`](courier_core::BlockingSender).
pub struct MailgunSender {
    identity: DefaultIdentity,
    config: MailgunConfig,
    client: Client,
}

impl std::fmt::Debug for MailgunSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailgunSender")
            .field("identity", &self.identity)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl MailgunSender {
    /// Create a new Mailgun sender with the given configuration.
    ///
    /// Uses a `reqwest::Client` with a 30 second timeout. Fails when the
    /// configured from-address is blank or malformed.
    pub fn new(config: MailgunConfig) -> Result<Self, MailgunError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Self::with_client(config, client)
    }

    /// Create a new Mailgun sender with a custom HTTP client.
    ///
    /// Useful for testing or for sharing a connection pool across senders.
    pub fn with_client(config: MailgunConfig, client: Client) -> Result<Self, MailgunError> {
        let identity =
            DefaultIdentity::new(config.from_address.clone(), config.display_name.clone())?;
        Ok(Self {
            identity,
            config,
            client,
        })
    }

    /// The configuration this sender was built from.
    pub fn config(&self) -> &MailgunConfig {
        &self.config
    }

    /// Build the messages endpoint URL for the configured domain.
    fn messages_url(&self) -> String {
        format!(
            "{}/{}/messages",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.domain
        )
    }

    /// Build the `from` header value.
    ///
    /// Mail always leaves through the domain's `mailgun@<domain>` mailbox; only
    /// the display name of `from` is carried over.
    fn from_header(&self, from: &EmailAddress) -> String {
        match from.display_name() {
            Some(name) => format!("{name} <mailgun@{}>", self.config.domain),
            None => format!("mailgun@{}", self.config.domain),
        }
    }

    fn build_request(
        &self,
        from: &EmailAddress,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> MailgunSendRequest {
        MailgunSendRequest {
            from: self.from_header(from),
            to: recipient.to_owned(),
            subject: subject.to_owned(),
            text: body.to_owned(),
        }
    }

    /// POST a message to Mailgun, turning a non-success status into
    /// [`MailgunError::Unsuccessful`].
    async fn post_message(&self, request: &MailgunSendRequest) -> Result<(), MailgunError> {
        let url = self.messages_url();

        let response = self
            .client
            .post(&url)
            .basic_auth("api", Some(&self.config.api_key))
            .form(request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, body = %body, "Mailgun rejected the message");
            return Err(MailgunError::Unsuccessful {
                response: MailgunResponse { status, body },
            });
        }

        Ok(())
    }
}

impl EmailSender for MailgunSender {
    type Error = MailgunError;

    fn identity(&self) -> &DefaultIdentity {
        &self.identity
    }

    #[instrument(
        skip(self, from, subject, body, cancel),
        fields(provider = "mailgun", domain = %self.config.domain, to = %recipient)
    )]
    async fn send_email_from(
        &self,
        from: &EmailAddress,
        recipient: &str,
        subject: &str,
        body: &str,
        cancel: &CancellationToken,
    ) -> Result<(), MailgunError> {
        if cancel.is_cancelled() {
            return Err(MailgunError::Cancelled);
        }

        let request = self.build_request(from, recipient, subject, body);
        debug!(from = %request.from, subject = %request.subject, "sending email via Mailgun");

        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                warn!("Mailgun send cancelled before a response arrived");
                return Err(MailgunError::Cancelled);
            }
            result = self.post_message(&request) => result?,
        }

        info!("email sent via Mailgun");
        Ok(())
    }
}
