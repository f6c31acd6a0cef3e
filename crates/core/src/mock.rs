//! In-memory sender used by this crate's tests.

use std::sync::Mutex;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::address::EmailAddress;
use crate::identity::DefaultIdentity;
use crate::sender::EmailSender;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("mock failure: {0}")]
pub struct MockError(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub from: EmailAddress,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Records every send; optionally fails every send with a fixed error.
pub struct RecordingSender {
    identity: DefaultIdentity,
    fail_with: Option<String>,
    sent: Mutex<Vec<SentEmail>>,
}

impl RecordingSender {
    pub fn new(from: &str, display_name: Option<&str>) -> Self {
        Self {
            identity: DefaultIdentity::new(from, display_name.map(str::to_owned)).unwrap(),
            fail_with: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(from: &str, message: &str) -> Self {
        Self {
            fail_with: Some(message.to_owned()),
            ..Self::new(from, None)
        }
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

impl EmailSender for RecordingSender {
    type Error = MockError;

    fn identity(&self) -> &DefaultIdentity {
        &self.identity
    }

    async fn send_email_from(
        &self,
        from: &EmailAddress,
        recipient: &str,
        subject: &str,
        body: &str,
        _cancel: &CancellationToken,
    ) -> Result<(), MockError> {
        // Yield once so blocking callers really wait on the runtime.
        tokio::task::yield_now().await;

        if let Some(message) = &self.fail_with {
            return Err(MockError(message.clone()));
        }
        self.sent.lock().unwrap().push(SentEmail {
            from: from.clone(),
            to: recipient.to_owned(),
            subject: subject.to_owned(),
            body: body.to_owned(),
        });
        Ok(())
    }
}
