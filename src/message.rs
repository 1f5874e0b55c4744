//! Email message types and builder.

use crate::view::Renderable;
use crate::{MailerError, Result};

/// An email address with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub address: String,
    pub name: Option<String>,
}

impl Recipient {
    pub fn new(address: impl Into<String>, name: Option<String>) -> Self {
        Self {
            address: address.into(),
            name,
        }
    }

    /// The display name to send for this address. A missing or blank name
    /// falls back to the address itself.
    pub fn display_name(&self) -> &str {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.address,
        }
    }
}

/// Whether an attachment is shown inline in the body (referenced via
/// `cid:` content id) or offered as a separate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Inline,
    Attachment,
}

impl Disposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Inline => "inline",
            Disposition::Attachment => "attachment",
        }
    }
}

/// A named attachment with renderable content.
pub struct Attachment {
    pub name: String,
    pub content: Box<dyn Renderable>,
    pub disposition: Disposition,
}

/// A complete email message, as handed to [`Mailer::dispatch`].
///
/// Recipient lists preserve insertion order; that order is significant for
/// the outbound request. The body is optional here so that its absence can
/// be diagnosed at dispatch time rather than hidden by the builder.
///
/// [`Mailer::dispatch`]: crate::Mailer::dispatch
pub struct Message {
    pub from: Recipient,
    pub reply_to: Option<Recipient>,
    pub to: Vec<Recipient>,
    pub cc: Vec<Recipient>,
    pub bcc: Vec<Recipient>,
    pub subject: String,
    pub body: Option<Box<dyn Renderable>>,
    pub attachments: Vec<Attachment>,
}

impl Message {
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }
}

/// Builder for [`Message`], mirroring the fluent mail API of the host
/// framework: `Message::builder().from(..).to(..).subject(..).body(..)`.
#[derive(Default)]
pub struct MessageBuilder {
    from: Option<Recipient>,
    reply_to: Option<Recipient>,
    to: Vec<Recipient>,
    cc: Vec<Recipient>,
    bcc: Vec<Recipient>,
    subject: Option<String>,
    body: Option<Box<dyn Renderable>>,
    attachments: Vec<Attachment>,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, address: impl Into<String>) -> Self {
        self.from = Some(Recipient::new(address, None));
        self
    }

    pub fn from_named(mut self, address: impl Into<String>, name: impl Into<String>) -> Self {
        self.from = Some(Recipient::new(address, Some(name.into())));
        self
    }

    pub fn reply_to(mut self, address: impl Into<String>) -> Self {
        self.reply_to = Some(Recipient::new(address, None));
        self
    }

    pub fn reply_to_named(mut self, address: impl Into<String>, name: impl Into<String>) -> Self {
        self.reply_to = Some(Recipient::new(address, Some(name.into())));
        self
    }

    pub fn to(mut self, address: impl Into<String>) -> Self {
        self.to.push(Recipient::new(address, None));
        self
    }

    pub fn to_named(mut self, address: impl Into<String>, name: impl Into<String>) -> Self {
        self.to.push(Recipient::new(address, Some(name.into())));
        self
    }

    pub fn cc(mut self, address: impl Into<String>) -> Self {
        self.cc.push(Recipient::new(address, None));
        self
    }

    pub fn cc_named(mut self, address: impl Into<String>, name: impl Into<String>) -> Self {
        self.cc.push(Recipient::new(address, Some(name.into())));
        self
    }

    pub fn bcc(mut self, address: impl Into<String>) -> Self {
        self.bcc.push(Recipient::new(address, None));
        self
    }

    pub fn bcc_named(mut self, address: impl Into<String>, name: impl Into<String>) -> Self {
        self.bcc.push(Recipient::new(address, Some(name.into())));
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn body(mut self, body: impl Renderable + 'static) -> Self {
        self.body = Some(Box::new(body));
        self
    }

    pub fn attach(
        mut self,
        name: impl Into<String>,
        content: impl Renderable + 'static,
        disposition: Disposition,
    ) -> Self {
        self.attachments.push(Attachment {
            name: name.into(),
            content: Box::new(content),
            disposition,
        });
        self
    }

    /// Build the message, validating sender, recipients and subject.
    ///
    /// A missing body is deliberately not an error here; dispatch reports it
    /// as [`MailerError::MissingBody`] before any network interaction.
    pub fn build(self) -> Result<Message> {
        let from = self
            .from
            .ok_or_else(|| MailerError::Builder("from address is required".to_string()))?;

        if self.to.is_empty() && self.cc.is_empty() && self.bcc.is_empty() {
            return Err(MailerError::Builder(
                "at least one to, cc or bcc recipient is required".to_string(),
            ));
        }

        let subject = self
            .subject
            .ok_or_else(|| MailerError::Builder("subject is required".to_string()))?;

        Ok(Message {
            from,
            reply_to: self.reply_to,
            to: self.to,
            cc: self.cc,
            bcc: self.bcc,
            subject,
            body: self.body,
            attachments: self.attachments,
        })
    }
}
