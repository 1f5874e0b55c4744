use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailerError {
    #[error("No email body supplied")]
    MissingBody,

    #[error("Failed to render email body: {0}")]
    Render(#[source] std::io::Error),

    #[error("Failed to add attachment '{name}' to SendGrid email: {source}")]
    Attachment {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to send email through SendGrid: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to send email through SendGrid ({status}): {body}")]
    Delivery { status: u16, body: String },

    #[error("Email builder error: {0}")]
    Builder(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MailerError>;
