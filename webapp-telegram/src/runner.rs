//! Polling runner: converts teloxide messages to InboundEvent and passes them to CommandService.
//! Calls get_me to learn the bot username and publishes the command menu before polling.

use anyhow::Result;
use command_router::{CommandRouter, CommandService};
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{debug, error, info, instrument, warn};
use webapp_core::{Reply, ToInboundEvent};

use super::adapters::TelegramMessageWrapper;

/// Converts one Telegram message and runs it through the service.
///
/// Non-command messages and commands addressed to other bots are ignored (`Ok(None)`).
pub async fn handle_message(
    service: &CommandService,
    msg: &Message,
    bot_username: Option<&str>,
) -> webapp_core::Result<Option<Reply>> {
    let Some(event) = TelegramMessageWrapper(msg).to_inbound_event(bot_username) else {
        debug!(chat_id = msg.chat.id.0, "Ignoring non-command message");
        return Ok(None);
    };

    info!(
        user_id = event.user_id(),
        chat_id = event.chat.id,
        command = %event.command,
        "Received command"
    );
    service.process(&event).await
}

/// Publishes the router's commands as the bot's command menu (setMyCommands).
pub async fn publish_commands(bot: &teloxide::Bot, router: &CommandRouter) -> Result<()> {
    let commands: Vec<BotCommand> = router
        .commands()
        .into_iter()
        .map(|(command, description)| {
            let description = if description.is_empty() {
                command.as_str().to_string()
            } else {
                description
            };
            BotCommand::new(command.as_str(), description)
        })
        .collect();
    let count = commands.len();
    bot.set_my_commands(commands).await?;
    info!(count, "Published command menu");
    Ok(())
}

/// Bot username learned from getMe, shared with every update handler.
#[derive(Clone, Debug, Default)]
pub struct BotUsername(pub Option<String>);

async fn on_message(
    msg: Message,
    service: CommandService,
    me: BotUsername,
) -> ResponseResult<()> {
    if let Err(e) = handle_message(&service, &msg, me.0.as_deref()).await {
        error!(error = %e, chat_id = msg.chat.id.0, "Command processing failed");
    }
    Ok(())
}

/// New and edited messages both go through [`handle_message`], so editing a message into
/// `/start` runs the command.
pub fn update_handler() -> UpdateHandler<teloxide::RequestError> {
    dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_edited_message().endpoint(on_message))
}

/// Starts long polling with the given teloxide Bot and CommandService until Ctrl-C.
///
/// Updates are distributed per chat: different chats are handled concurrently, updates from
/// one chat are handled in the order they arrived.
#[instrument(skip(bot, service))]
pub async fn run_polling(bot: teloxide::Bot, service: CommandService) -> Result<()> {
    let bot_username = match bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.clone();
            info!(username = ?username, "Bot username set before polling");
            username
        }
        Err(e) => {
            warn!(error = %e, "get_me failed; accepting /command@any_bot");
            None
        }
    };

    if let Err(e) = publish_commands(&bot, service.router()).await {
        warn!(error = %e, "Failed to publish command menu");
    }

    Dispatcher::builder(bot, update_handler())
        .dependencies(dptree::deps![service, BotUsername(bot_username)])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
