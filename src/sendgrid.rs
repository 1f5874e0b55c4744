//! SendGrid transport.

use crate::message::{Attachment, Message, Recipient};
use crate::view::{self, RenderedContent, TEXT_HTML, TEXT_PLAIN};
use crate::wire::{AttachmentPayload, Content, EmailAddress, MailSendRequest, Personalization};
use crate::{Mailer, MailerError, Result, SendGridConfig};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;

pub const SENDGRID_API_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// Sends email through the SendGrid v3 Mail Send API.
///
/// Holds an API key and a shared [`reqwest::Client`]; both are immutable for
/// the life of the mailer, so one instance can serve concurrent dispatches.
#[derive(Debug, Clone)]
pub struct SendGridMailer {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl SendGridMailer {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(api_key, Client::new())
    }

    /// Use a caller-supplied HTTP client, e.g. one with custom timeouts or
    /// proxy settings.
    pub fn with_client(api_key: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            endpoint: SENDGRID_API_URL.to_string(),
        }
    }

    pub fn from_config(config: &SendGridConfig) -> Self {
        let mut mailer = Self::new(config.api_key.clone());
        if let Some(endpoint) = &config.endpoint {
            mailer.endpoint = endpoint.clone();
        }
        mailer
    }

    /// Override the mail-send endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Translate a message into the outbound request body. Fails without
    /// any network interaction when the body is missing or a view cannot
    /// be rendered.
    fn build_request(&self, message: &Message) -> Result<MailSendRequest> {
        let body = message.body.as_ref().ok_or(MailerError::MissingBody)?;
        let rendered = body.render().map_err(MailerError::Render)?;
        let content = body_content(&rendered);

        let personalization = Personalization {
            to: addresses(&message.to),
            cc: optional_addresses(&message.cc),
            bcc: optional_addresses(&message.bcc),
        };

        let attachments = if message.attachments.is_empty() {
            None
        } else {
            let mut payloads = Vec::with_capacity(message.attachments.len());
            for attachment in &message.attachments {
                payloads.push(attachment_payload(attachment)?);
            }
            Some(payloads)
        };

        Ok(MailSendRequest {
            personalizations: vec![personalization],
            from: address(&message.from),
            reply_to: message.reply_to.as_ref().map(address),
            subject: message.subject.clone(),
            content: vec![content],
            attachments,
        })
    }
}

#[async_trait]
impl Mailer for SendGridMailer {
    async fn dispatch(&self, message: &Message) -> Result<()> {
        let request = self.build_request(message)?;

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::info!(status = status.as_u16(), message = %body, "SendGrid response");

        if !status.is_success() {
            return Err(MailerError::Delivery {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

/// Picks the plain-text representation when the rendered content type is in
/// the `text/plain` family; anything else, including a missing or blank
/// type, is treated as HTML.
fn body_content(rendered: &RenderedContent) -> Content {
    let content_type = match rendered.clean_content_type() {
        Some(media_type) if media_type == TEXT_PLAIN => TEXT_PLAIN,
        _ => TEXT_HTML,
    };
    Content {
        content_type: content_type.to_string(),
        value: String::from_utf8_lossy(&rendered.body).into_owned(),
    }
}

fn address(recipient: &Recipient) -> EmailAddress {
    EmailAddress {
        email: recipient.address.clone(),
        name: recipient.display_name().to_string(),
    }
}

fn addresses(recipients: &[Recipient]) -> Vec<EmailAddress> {
    recipients.iter().map(address).collect()
}

fn optional_addresses(recipients: &[Recipient]) -> Option<Vec<EmailAddress>> {
    if recipients.is_empty() {
        None
    } else {
        Some(addresses(recipients))
    }
}

fn attachment_payload(attachment: &Attachment) -> Result<AttachmentPayload> {
    let rendered = attachment
        .content
        .render()
        .map_err(|source| MailerError::Attachment {
            name: attachment.name.clone(),
            source,
        })?;

    Ok(AttachmentPayload {
        content: BASE64.encode(&rendered.body),
        content_type: view::clean_content_type(rendered.content_type.as_deref()),
        filename: attachment.name.clone(),
        disposition: attachment.disposition.as_str().to_string(),
        content_id: attachment.name.clone(),
    })
}
