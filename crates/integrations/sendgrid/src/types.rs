use serde::{Deserialize, Serialize};

/// An address in a SendGrid payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendGridEmail {
    /// The email address.
    pub email: String,

    /// Optional display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A block of message content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendGridContent {
    /// MIME type (`text/plain` or `text/html`).
    #[serde(rename = "type")]
    pub content_type: String,

    /// The content itself.
    pub value: String,
}

/// Recipients of one copy of the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendGridPersonalization {
    /// Recipient addresses.
    pub to: Vec<SendGridEmail>,
}

/// JSON body of `POST /v3/mail/send`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendGridMailRequest {
    /// One personalization per copy of the message.
    pub personalizations: Vec<SendGridPersonalization>,

    /// Sender address.
    pub from: SendGridEmail,

    /// Subject line.
    pub subject: String,

    /// Content blocks; `text/plain` must come before `text/html`.
    pub content: Vec<SendGridContent>,
}

impl SendGridMailRequest {
    /// Build a message for a single recipient carrying both a plain-text and
    /// an HTML body.
    pub fn single_email(
        from: SendGridEmail,
        to: SendGridEmail,
        subject: impl Into<String>,
        plain_text: impl Into<String>,
        html: impl Into<String>,
    ) -> Self {
        Self {
            personalizations: vec![SendGridPersonalization { to: vec![to] }],
            from,
            subject: subject.into(),
            content: vec![
                SendGridContent {
                    content_type: "text/plain".to_owned(),
                    value: plain_text.into(),
                },
                SendGridContent {
                    content_type: "text/html".to_owned(),
                    value: html.into(),
                },
            ],
        }
    }
}
