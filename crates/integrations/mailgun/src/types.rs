use reqwest::StatusCode;
use serde::Serialize;

/// Form-encoded request body for the Mailgun messages API.
///
/// Mailgun expects `application/x-www-form-urlencoded` (or multipart) rather
/// than JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailgunSendRequest {
    /// Value of the `From` header, e.g. `Example <mailgun@mg.example.com>`.
    pub from: String,

    /// Recipient address.
    pub to: String,

    /// Subject line.
    pub subject: String,

    /// Plain-text body.
    pub text: String,
}

/// The raw response Mailgun returned for a rejected send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailgunResponse {
    /// HTTP status code.
    pub status: StatusCode,

    /// Response body, as returned by the API (usually a JSON `message`).
    pub body: String,
}
