use crate::{MailerError, Result};

/// Configuration for the SendGrid mailer.
#[derive(Debug, Clone)]
pub struct SendGridConfig {
    /// SendGrid API key, sent as a bearer token.
    pub api_key: String,
    /// Override for the mail-send endpoint. Defaults to the public
    /// SendGrid v3 endpoint; mainly useful for pointing tests at a
    /// local server.
    pub endpoint: Option<String>,
}

impl SendGridConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Read configuration from the environment.
    ///
    /// `SENDGRID_API_KEY` is required; `SENDGRID_ENDPOINT` is optional.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("SENDGRID_API_KEY")
            .map_err(|_| MailerError::Config("SENDGRID_API_KEY is not set".to_string()))?;

        Ok(Self {
            api_key,
            endpoint: std::env::var("SENDGRID_ENDPOINT").ok(),
        })
    }
}
