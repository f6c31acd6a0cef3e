//! Mailgun sender for Courier.
//!
//! This crate implements [`EmailSender`](courier_core::EmailSender) on top of
//! the [Mailgun messages API](https://documentation.mailgun.com/docs/mailgun/api-reference/).
//!
//! # Quick start
//!
//! ```rust,no_run
//! use courier_core::{CancellationToken, EmailSender};
//! use courier_mailgun::{MailgunConfig, MailgunSender};
//!
//! # async fn run() -> Result<(), courier_mailgun::MailgunError> {
//! let config = MailgunConfig::new("key-123", "mg.example.com", "noreply@example.com")
//!     .with_display_name("Example");
//! let sender = MailgunSender::new(config)?;
//! sender
//!     .send_email("user@example.com", "Hello", "Plain text body", &CancellationToken::new())
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod sender;
pub mod types;

pub use config::MailgunConfig;
pub use error::MailgunError;
pub use sender::MailgunSender;
pub use types::{MailgunResponse, MailgunSendRequest};
