//! Wraps teloxide::Bot and implements [`webapp_core::Bot`]. Production code sends replies via
//! Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::requests::JsonRequest;
use teloxide::types::{
    ChatId, InlineKeyboardButton, InlineKeyboardMarkup, MessageId, ReplyParameters, ThreadId,
    WebAppInfo,
};
use webapp_core::{Bot as CoreBot, BotError, Chat, InboundEvent, Reply, Result, WebAppButton};

/// Single-row inline keyboard holding one button that opens the Web App.
pub fn web_app_markup(button: &WebAppButton) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::web_app(
        button.label.clone(),
        WebAppInfo {
            url: button.url.clone(),
        },
    )]])
}

/// Thin wrapper around teloxide::Bot that implements webapp-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    fn message_request(
        &self,
        chat: &Chat,
        reply: &Reply,
    ) -> JsonRequest<teloxide::payloads::SendMessage> {
        let request = self.bot.send_message(ChatId(chat.id), reply.text.clone());
        match &reply.button {
            Some(button) => request.reply_markup(web_app_markup(button)),
            None => request,
        }
    }
}

/// Message to quote in the reply: the command itself, except in private chats.
fn quotes_command(event: &InboundEvent) -> Option<MessageId> {
    if event.chat.chat_type == "private" {
        return None;
    }
    event.id.parse().ok().map(MessageId)
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        self.message_request(chat, reply)
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(())
    }

    async fn reply_to(&self, event: &InboundEvent, reply: &Reply) -> Result<()> {
        let mut request = self.message_request(&event.chat, reply);
        if let Some(thread_id) = event.thread_id {
            request = request.message_thread_id(ThreadId(MessageId(thread_id)));
        }
        if let Some(message_id) = quotes_command(event) {
            request = request
                .reply_parameters(ReplyParameters::new(message_id).allow_sending_without_reply());
        }
        request
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(())
    }
}
