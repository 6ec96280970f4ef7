//! # webapp-telegram
//!
//! Telegram transport layer: adapters from teloxide updates to [`webapp_core::InboundEvent`],
//! a [`webapp_core::Bot`] implementation that renders Web App buttons, minimal config, and the
//! long-polling runner. Handles only Telegram connectivity; command semantics live in
//! command-router and the application crate.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{web_app_markup, TelegramBotAdapter};
pub use config::TelegramConfig;
pub use runner::{handle_message, publish_commands, run_polling, update_handler, BotUsername};
