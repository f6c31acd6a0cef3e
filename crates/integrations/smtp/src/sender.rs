use courier_core::{CancellationToken, DefaultIdentity, EmailAddress, EmailSender};
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, error, info, instrument};

use crate::config::SmtpConfig;
use crate::error::SmtpError;

/// SMTP email sender using `lettre`.
///
/// The configuration is validated when the sender is built. Each send opens a
/// new transport to `server:port`, authenticates with the configured
/// credentials, and delivers one plain-text message.
pub struct SmtpSender {
    identity: DefaultIdentity,
    config: SmtpConfig,
}

impl std::fmt::Debug for SmtpSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpSender")
            .field("identity", &self.identity)
            .field("config", &self.config)
            .finish()
    }
}

impl SmtpSender {
    /// Create a new `SmtpSender`, validating the configuration first.
    ///
    /// Returns [`SmtpError::InvalidConfiguration`] when the server, user name,
    /// password, or port is invalid, and [`SmtpError::Email`] when the
    /// from-address is blank or malformed.
    pub fn new(config: SmtpConfig) -> Result<Self, SmtpError> {
        config.validate()?;
        let identity =
            DefaultIdentity::new(config.from_address.clone(), config.display_name.clone())?;
        Ok(Self { identity, config })
    }

    /// The configuration this sender was built from.
    pub fn config(&self) -> &SmtpConfig {
        &self.config
    }
}

impl EmailSender for SmtpSender {
    type Error = SmtpError;

    fn identity(&self) -> &DefaultIdentity {
        &self.identity
    }

    /// Cancellation is only observed before the SMTP dialogue starts.
    #[instrument(
        skip(self, from, subject, body, cancel),
        fields(provider = "smtp", server = %self.config.server, to = %recipient)
    )]
    async fn send_email_from(
        &self,
        from: &EmailAddress,
        recipient: &str,
        subject: &str,
        body: &str,
        cancel: &CancellationToken,
    ) -> Result<(), SmtpError> {
        debug!(from = %from, subject = %subject, "building SMTP message");
        let message = build_message(from, recipient, subject, body)?;
        let transport = build_transport(&self.config)?;

        if cancel.is_cancelled() {
            return Err(SmtpError::Cancelled);
        }

        info!("sending email via SMTP");
        transport.send(message).await.map_err(|e| {
            error!(error = %e, "SMTP send failed");
            e
        })?;

        info!("email sent successfully via SMTP");
        Ok(())
    }
}

/// Build a plain-text `lettre::Message`.
fn build_message(
    from: &EmailAddress,
    recipient: &str,
    subject: &str,
    body: &str,
) -> Result<Message, SmtpError> {
    let from_mailbox = Mailbox::new(
        from.display_name().map(str::to_owned),
        from.address().parse::<Address>()?,
    );
    let to_mailbox: Mailbox = recipient.parse()?;

    let message = Message::builder()
        .from(from_mailbox)
        .to(to_mailbox)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(body.to_owned())?;

    Ok(message)
}

/// Build an async SMTP transport from the given configuration.
fn build_transport(config: &SmtpConfig) -> Result<AsyncSmtpTransport<Tokio1Executor>, SmtpError> {
    let builder = if config.enable_ssl {
        AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.server)?
    } else {
        AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.server)
    };

    Ok(builder
        .port(config.port)
        .credentials(Credentials::new(
            config.user_name.clone(),
            config.password.clone(),
        ))
        .build())
}
