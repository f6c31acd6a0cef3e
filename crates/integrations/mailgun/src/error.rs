use courier_core::EmailError;
use thiserror::Error;

use crate::types::MailgunResponse;

/// Errors produced by the Mailgun sender.
#[derive(Debug, Error)]
pub enum MailgunError {
    /// Mailgun answered with a non-success status. Carries the raw response.
    #[error("failed to send email, unsuccessful response")]
    Unsuccessful {
        /// The response Mailgun returned.
        response: MailgunResponse,
    },

    /// An HTTP-level transport error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The send was cancelled before Mailgun answered.
    #[error("email send was cancelled")]
    Cancelled,

    /// The configured identity or a supplied address is invalid.
    #[error(transparent)]
    Email(#[from] EmailError),
}

impl MailgunError {
    /// The raw provider response, if Mailgun rejected the send.
    pub fn response(&self) -> Option<&MailgunResponse> {
        match self {
            Self::Unsuccessful { response } => Some(response),
            _ => None,
        }
    }
}
