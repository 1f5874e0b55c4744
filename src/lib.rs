//! SendGrid mail delivery for thundr applications.
//!
//! This crate is a thin adapter between a generic mailer abstraction and
//! the SendGrid v3 Mail Send API: a message (sender, recipients, subject, a
//! renderable body, attachments) is translated field-by-field into the
//! vendor's JSON request and delivered with a single HTTPS call.
//!
//! ```no_run
//! use thundr_sendgrid::prelude::*;
//!
//! # async fn example() -> thundr_sendgrid::Result<()> {
//! let mailer = SendGridMailer::from_config(&SendGridConfig::from_env()?);
//!
//! let message = Message::builder()
//!     .from_named("me@mail.com", "Me")
//!     .to_named("someone@mail.com", "Recipient")
//!     .subject("Subject")
//!     .body(StringView::html("<h1>Content</h1>"))
//!     .build()?;
//!
//! mailer.dispatch(&message).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod mailer;
pub mod message;
pub mod sendgrid;
pub mod view;
pub mod wire;

pub use config::SendGridConfig;
pub use error::{MailerError, Result};
pub use mailer::{Mailer, MailerService};
pub use message::{Attachment, Disposition, Message, MessageBuilder, Recipient};
pub use sendgrid::{SENDGRID_API_URL, SendGridMailer};
pub use view::{FileView, Renderable, RenderedContent, StringView};

pub mod prelude {
    pub use crate::{
        Attachment, Disposition, FileView, Mailer, MailerError, MailerService, Message,
        MessageBuilder, Recipient, Renderable, RenderedContent, SendGridConfig, SendGridMailer,
        StringView,
    };
}
