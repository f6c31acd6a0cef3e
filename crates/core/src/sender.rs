use std::future::Future;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::address::EmailAddress;
use crate::identity::DefaultIdentity;

/// Boxed error returned through [`DynEmailSender`].
///
/// Callers that need the backend's typed error can `downcast_ref` it.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A backend capable of sending plain-text email.
///
/// Backends implement only [`send_email_from`](Self::send_email_from) and
/// [`identity`](Self::identity); [`send_email`](Self::send_email) is derived
/// from them and always sends as the backend's [`DefaultIdentity`].
///
/// This trait is **not** object-safe because it uses native `async fn`
/// methods. Use [`DynEmailSender`] for dynamic dispatch; every `EmailSender`
/// implements it through a blanket implementation. For synchronous callers,
/// wrap the sender in a [`BlockingSender`](crate::BlockingSender).
pub trait EmailSender: Send + Sync {
    /// The error produced when a send fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identity used when no explicit from-address is given.
    fn identity(&self) -> &DefaultIdentity;

    /// Send a plain-text email from an explicit address.
    ///
    /// The send is abandoned when `cancel` fires, to the extent the backend's
    /// transport supports it.
    fn send_email_from(
        &self,
        from: &EmailAddress,
        recipient: &str,
        subject: &str,
        body: &str,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Send a plain-text email from the sender's default identity.
    fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        async move {
            let from = EmailSender::identity(self).mailbox();
            EmailSender::send_email_from(self, &from, recipient, subject, body, cancel).await
        }
    }
}

/// Object-safe sender trait for use behind `Box<dyn DynEmailSender>`.
///
/// You generally should not implement this trait directly -- implement
/// [`EmailSender`] and rely on the blanket implementation.
#[async_trait]
pub trait DynEmailSender: Send + Sync {
    /// The identity used when no explicit from-address is given.
    fn identity(&self) -> &DefaultIdentity;

    /// Send a plain-text email from the sender's default identity.
    async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
        cancel: &CancellationToken,
    ) -> Result<(), BoxError>;

    /// Send a plain-text email from an explicit address.
    async fn send_email_from(
        &self,
        from: &EmailAddress,
        recipient: &str,
        subject: &str,
        body: &str,
        cancel: &CancellationToken,
    ) -> Result<(), BoxError>;
}

#[async_trait]
impl<T: EmailSender> DynEmailSender for T {
    fn identity(&self) -> &DefaultIdentity {
        EmailSender::identity(self)
    }

    async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
        cancel: &CancellationToken,
    ) -> Result<(), BoxError> {
        EmailSender::send_email(self, recipient, subject, body, cancel)
            .await
            .map_err(Into::into)
    }

    async fn send_email_from(
        &self,
        from: &EmailAddress,
        recipient: &str,
        subject: &str,
        body: &str,
        cancel: &CancellationToken,
    ) -> Result<(), BoxError> {
        EmailSender::send_email_from(self, from, recipient, subject, body, cancel)
            .await
            .map_err(Into::into)
    }
}
