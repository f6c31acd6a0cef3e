use std::time::Duration;

use courier_core::{CancellationToken, DefaultIdentity, EmailAddress, EmailSender};
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use crate::config::SendGridConfig;
use crate::error::SendGridError;
use crate::types::{SendGridEmail, SendGridMailRequest};

/// SendGrid sender that delivers plain-text email via the v3 mail send API.
///
/// The plain-text body is also sent as the HTML part. The API's answer is not
/// interpreted: any response counts as a successful send.
pub struct SendGridSender {
    identity: DefaultIdentity,
    config: SendGridConfig,
    client: Client,
}

impl std::fmt::Debug for SendGridSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendGridSender")
            .field("identity", &self.identity)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SendGridSender {
    /// Create a new SendGrid sender with the given configuration.
    ///
    /// Uses a `reqwest::Client` with a 30 second timeout.
    pub fn new(config: SendGridConfig) -> Result<Self, SendGridError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Self::with_client(config, client)
    }

    /// Create a new SendGrid sender with a custom HTTP client.
    pub fn with_client(config: SendGridConfig, client: Client) -> Result<Self, SendGridError> {
        let identity =
            DefaultIdentity::new(config.from_address.clone(), config.display_name.clone())?;
        Ok(Self {
            identity,
            config,
            client,
        })
    }

    /// The configuration this sender was built from.
    pub fn config(&self) -> &SendGridConfig {
        &self.config
    }

    fn mail_send_url(&self) -> String {
        format!(
            "{}/v3/mail/send",
            self.config.api_base_url.trim_end_matches('/')
        )
    }

    fn build_request(
        from: &EmailAddress,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> SendGridMailRequest {
        let from = SendGridEmail {
            email: from.address().to_owned(),
            name: from.display_name().map(str::to_owned),
        };
        let to = SendGridEmail {
            email: recipient.to_owned(),
            name: None,
        };
        // The plain text doubles as the HTML part.
        SendGridMailRequest::single_email(from, to, subject, body, body)
    }

    /// POST the message. Only transport errors are reported.
    async fn post_mail(&self, request: &SendGridMailRequest) -> Result<(), SendGridError> {
        let response = self
            .client
            .post(self.mail_send_url())
            .bearer_auth(&self.config.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "SendGrid accepted the message");
        } else {
            // The send is still reported as successful to the caller.
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body = %body, "SendGrid answered with a non-success status");
        }

        Ok(())
    }
}

impl EmailSender for SendGridSender {
    type Error = SendGridError;

    fn identity(&self) -> &DefaultIdentity {
        &self.identity
    }

    #[instrument(
        skip(self, from, subject, body, cancel),
        fields(provider = "sendgrid", to = %recipient)
    )]
    async fn send_email_from(
        &self,
        from: &EmailAddress,
        recipient: &str,
        subject: &str,
        body: &str,
        cancel: &CancellationToken,
    ) -> Result<(), SendGridError> {
        if cancel.is_cancelled() {
            return Err(SendGridError::Cancelled);
        }

        let request = Self::build_request(from, recipient, subject, body);
        debug!(from = %from, subject = %request.subject, "sending email via SendGrid");

        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                warn!("SendGrid send cancelled before a response arrived");
                return Err(SendGridError::Cancelled);
            }
            result = self.post_mail(&request) => result?,
        }

        info!("email submitted to SendGrid");
        Ok(())
    }
}
