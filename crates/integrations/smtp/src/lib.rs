//! SMTP sender for Courier.
//!
//! Validates its configuration eagerly and delivers each email over a fresh
//! [`lettre`] SMTP transport.
//!
//! ```rust,no_run
//! use courier_core::{CancellationToken, EmailSender};
//! use courier_smtp::{SmtpConfig, SmtpSender};
//!
//! # async fn run() -> Result<(), courier_smtp::SmtpError> {
//! let config = SmtpConfig::new("smtp.example.com", 587, "user", "secret", "noreply@example.com")
//!     .with_display_name("Example");
//! let sender = SmtpSender::new(config)?;
//! sender
//!     .send_email("user@example.com", "Hello", "Plain text body", &CancellationToken::new())
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod sender;

pub use config::SmtpConfig;
pub use error::SmtpError;
pub use sender::SmtpSender;
