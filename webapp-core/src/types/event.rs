//! Inbound event: one command issued by a user in a chat.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, command::Command, user::User};

/// A single user-issued command, as delivered by the transport. Consumed by the router and dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundEvent {
    /// Transport-specific message id (e.g. Telegram numeric id as string).
    pub id: String,
    pub chat: Chat,
    /// Forum topic the command was posted in; replies go to the same topic.
    pub thread_id: Option<i32>,
    /// Sender; absent for channel posts and anonymous admins.
    pub user: Option<User>,
    pub command: Command,
    /// Text after the command, trimmed. Empty when none.
    pub args: String,
    pub received_at: DateTime<Utc>,
}

impl InboundEvent {
    pub fn new(chat: Chat, command: Command) -> Self {
        Self {
            id: String::new(),
            chat,
            thread_id: None,
            user: None,
            command,
            args: String::new(),
            received_at: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_thread_id(mut self, thread_id: i32) -> Self {
        self.thread_id = Some(thread_id);
        self
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_args(mut self, args: impl Into<String>) -> Self {
        self.args = args.into();
        self
    }

    /// Sender id, or 0 when the sender is unknown (used as a log field).
    pub fn user_id(&self) -> i64 {
        self.user.as_ref().map_or(0, |u| u.id)
    }
}
