//! SendGrid sender for Courier.
//!
//! This crate implements [`EmailSender`](courier_core::EmailSender) on top of
//! the [SendGrid v3 mail send API](https://www.twilio.com/docs/sendgrid/api-reference/mail-send/mail-send).
//!
//! The sender reports success for every send that reaches SendGrid, whatever
//! status the API answers with; only transport failures surface as errors.
//! Rejected sends are logged at `warn` level.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use courier_core::{CancellationToken, EmailSender};
//! use courier_sendgrid::{SendGridConfig, SendGridSender};
//!
//! # async fn run() -> Result<(), courier_sendgrid::SendGridError> {
//! let config = SendGridConfig::new("SG.xxxx", "noreply@example.com").with_display_name("Example");
//! let sender = SendGridSender::new(config)?;
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

pub use config::SendGridConfig;
pub use error::SendGridError;
pub use sender::SendGridSender;
pub use types::{SendGridContent, SendGridEmail, SendGridMailRequest, SendGridPersonalization};
