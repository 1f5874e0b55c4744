use crate::{Message, Result};
use async_trait::async_trait;

/// The mailer capability: one call per fully-collected message.
///
/// Implementations perform exactly one delivery attempt; failures are
/// reported to the caller and never retried internally.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn dispatch(&self, message: &Message) -> Result<()>;
}

/// Generic wrapper an application registers as its mailer, delegating to
/// whichever transport it was constructed with.
#[derive(Debug, Clone)]
pub struct MailerService<T: Mailer> {
    transport: T,
}

impl<T: Mailer> MailerService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn send(&self, message: &Message) -> Result<()> {
        self.transport.dispatch(message).await
    }
}

#[async_trait]
impl<T: Mailer> Mailer for MailerService<T> {
    async fn dispatch(&self, message: &Message) -> Result<()> {
        self.transport.dispatch(message).await
    }
}
