use courier_core::EmailError;
use thiserror::Error;

/// Errors produced by the SendGrid sender.
///
/// A send that reaches SendGrid never produces an error, even when the API
/// rejects it; see the crate documentation.
#[derive(Debug, Error)]
pub enum SendGridError {
    /// An HTTP-level transport error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The send was cancelled before SendGrid answered.
    #[error("email send was cancelled")]
    Cancelled,

    /// The configured identity or a supplied address is invalid.
    #[error(transparent)]
    Email(#[from] EmailError),
}
