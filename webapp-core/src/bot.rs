//! Bot abstraction for delivering replies.
//!
//! [`Bot`] is transport-agnostic; webapp-telegram implements it via teloxide. Tests substitute
//! an in-memory implementation.

use crate::error::Result;
use crate::types::{Chat, InboundEvent, Reply};
use async_trait::async_trait;

/// Outbound side of the chat transport: sends a [`Reply`] to a chat.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a reply (text and optional Web App button) to the given chat.
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()>;

    /// Answers the message that produced `event`. Transports that can thread replies (quote the
    /// command, stay in its forum topic) override this; the default sends to `event.chat`.
    async fn reply_to(&self, event: &InboundEvent, reply: &Reply) -> Result<()> {
        self.send_reply(&event.chat, reply).await
    }

    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.send_reply(chat, &Reply::text(text)).await
    }
}
