//! Core sender contract for Courier.
//!
//! A sender delivers one plain-text email per call through a single backend
//! (Mailgun, SendGrid, SMTP, ...). Backends implement [`EmailSender`]; this
//! crate supplies the default-identity convenience send, the synchronous
//! [`BlockingSender`] facade, and the object-safe [`DynEmailSender`].

pub mod address;
pub mod blocking;
pub mod error;
pub mod identity;
pub mod sender;

#[cfg(test)]
mod mock;

pub use address::EmailAddress;
pub use blocking::BlockingSender;
pub use error::EmailError;
pub use identity::DefaultIdentity;
pub use sender::{BoxError, DynEmailSender, EmailSender};

// Re-exported so backends and callers share one cancellation type.
pub use tokio_util::sync::CancellationToken;
