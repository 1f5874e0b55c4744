//! SendGrid v3 `mail/send` request body.
//!
//! Optional fields are omitted from the JSON entirely rather than sent as
//! null; SendGrid rejects empty lists for `cc`/`bcc`.

use serde::{Deserialize, Serialize};

/// The full JSON body of a mail-send request. Exactly one
/// [`Personalization`] block is emitted per send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailSendRequest {
    pub personalizations: Vec<Personalization>,
    pub from: EmailAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<EmailAddress>,
    pub subject: String,
    pub content: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<AttachmentPayload>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personalization {
    pub to: Vec<EmailAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Vec<EmailAddress>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<EmailAddress>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailAddress {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Content {
    #[serde(rename = "type")]
    pub content_type: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttachmentPayload {
    /// Base64-encoded attachment bytes.
    pub content: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    pub filename: String,
    pub disposition: String,
    /// Used for inline `cid:` references; SendGrid adds the enclosing
    /// angle brackets itself.
    pub content_id: String,
}
