//! Adapters from Telegram (teloxide) types to webapp_core types.
//! Depends only on teloxide and webapp_core type definitions.

use webapp_core::{Chat, InboundEvent, ParsedCommand, ToInboundEvent, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl TelegramUserWrapper<'_> {
    pub fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to an [`InboundEvent`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl TelegramMessageWrapper<'_> {
    fn chat(&self) -> Chat {
        let chat = &self.0.chat;
        let chat_type = if chat.is_private() {
            "private"
        } else if chat.is_supergroup() {
            "supergroup"
        } else if chat.is_group() {
            "group"
        } else if chat.is_channel() {
            "channel"
        } else {
            "unknown"
        };
        Chat::new(chat.id.0, chat_type)
    }
}

impl ToInboundEvent for TelegramMessageWrapper<'_> {
    fn to_inbound_event(&self, bot_username: Option<&str>) -> Option<InboundEvent> {
        let text = self.0.text()?;
        let parsed = ParsedCommand::parse(text, bot_username)?;

        let mut event = InboundEvent::new(self.chat(), parsed.command)
            .with_id(self.0.id.0.to_string())
            .with_args(parsed.args);
        if let Some(thread_id) = self.0.thread_id.filter(|_| self.0.is_topic_message) {
            event = event.with_thread_id(thread_id.0 .0);
        }
        if let Some(user) = self.0.from.as_ref() {
            event = event.with_user(TelegramUserWrapper(user).to_core());
        }
        event.received_at = self.0.date;
        Some(event)
    }
}
