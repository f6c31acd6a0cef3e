use courier_core::EmailError;
use thiserror::Error;

use crate::config::SmtpConfig;

/// Errors produced by the SMTP sender.
#[derive(Debug, Error)]
pub enum SmtpError {
    /// The configuration failed validation. Carries the offending
    /// configuration and the name of the field that was rejected.
    #[error("invalid SMTP configuration: {message}")]
    InvalidConfiguration {
        /// The rejected configuration.
        config: Box<SmtpConfig>,
        /// Name of the invalid field.
        field: &'static str,
        /// Human-readable description of the problem.
        message: String,
    },

    /// Error reported by the SMTP transport (connection, TLS, or a server
    /// reply), passed through as-is.
    #[error(transparent)]
    Transport(#[from] lettre::transport::smtp::Error),

    /// A from or recipient address could not be parsed into a mailbox.
    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled.
    #[error("failed to build email: {0}")]
    Message(#[from] lettre::error::Error),

    /// The send was cancelled before the SMTP dialogue started.
    #[error("email send was cancelled")]
    Cancelled,

    /// The configured identity is invalid.
    #[error(transparent)]
    Email(#[from] EmailError),
}
