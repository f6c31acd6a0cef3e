use std::fmt;

use tokio::runtime::{Builder, Runtime};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::address::EmailAddress;
use crate::sender::EmailSender;

/// Synchronous facade over an [`EmailSender`].
///
/// Each call blocks the calling thread until the wrapped sender's async
/// primitive completes, and returns the sender's error unchanged. The facade
/// owns a current-thread tokio runtime, so it must not be used from inside
/// another async runtime (tokio panics when asked to block there).
///
/// # Examples
///
/// ```no_run
/// use courier_core::{BlockingSender, EmailSender};
///
/// fn notify<S: EmailSender>(sender: S) -> Result<(), Box<dyn std::error::Error>> {
///     let blocking = BlockingSender::new(sender)?;
///     blocking.send_email("user@example.com", "Hello", "Plain text body")?;
///     Ok(())
/// }
/// ```
pub struct BlockingSender<S> {
    sender: S,
    runtime: Runtime,
}

impl<S: EmailSender> BlockingSender<S> {
    /// Wrap `sender`, building the runtime used to drive its sends.
    pub fn new(sender: S) -> std::io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { sender, runtime })
    }

    /// The wrapped sender.
    pub fn sender(&self) -> &S {
        &self.sender
    }

    /// Unwrap the sender, dropping the runtime.
    pub fn into_inner(self) -> S {
        self.sender
    }

    /// Send a plain-text email from the default identity. Blocks the calling thread.
    pub fn send_email(&self, recipient: &str, subject: &str, body: &str) -> Result<(), S::Error> {
        debug!(to = %recipient, "blocking on email send");
        let cancel = CancellationToken::new();
        self.runtime
            .block_on(self.sender.send_email(recipient, subject, body, &cancel))
    }

    /// Send a plain-text email from an explicit address. Blocks the calling thread.
    pub fn send_email_from(
        &self,
        from: &EmailAddress,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), S::Error> {
        debug!(from = %from, to = %recipient, "blocking on email send");
        let cancel = CancellationToken::new();
        self.runtime.block_on(
            self.sender
                .send_email_from(from, recipient, subject, body, &cancel),
        )
    }
}

impl<S: fmt::Debug> fmt::Debug for BlockingSender<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockingSender")
            .field("sender", &self.sender)
            .field("runtime", &"<current_thread>")
            .finish()
    }
}
