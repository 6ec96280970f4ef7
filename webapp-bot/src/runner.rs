//! Entry point: validate config, init logging, build the command table, then poll for updates.

use anyhow::Result;
use command_router::{CommandRouter, CommandService};
use std::sync::Arc;
use tracing::{info, instrument};
use webapp_core::{init_tracing, Reply};
use webapp_telegram::{run_polling, TelegramBotAdapter};

use crate::config::BotConfig;
use crate::handlers::{OpenWebAppHandler, StartHandler};

/// Builds the command table: `/start`, `/open`, and the unknown-command reply when configured.
pub fn build_router(config: &BotConfig) -> Result<CommandRouter> {
    let mut router = CommandRouter::new()
        .register("start", Arc::new(StartHandler::new()))?
        .register(
            "open",
            Arc::new(OpenWebAppHandler::new(config.web_app_url().clone())),
        )?;
    if let Some(text) = config.unknown_command_reply() {
        router = router.with_fallback(Reply::text(text));
    }
    Ok(router)
}

/// Main entry: validate config, init logging, build router and Telegram transport, then poll
/// until Ctrl-C.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(Some(config.log_file()))?;

    info!(
        web_app_url = %config.web_app_url(),
        telegram_api_url = ?config.telegram_api_url(),
        fallback = config.unknown_command_reply().is_some(),
        "Initializing bot"
    );

    let bot = config.telegram_config().build_bot()?;
    let router = Arc::new(build_router(&config)?);
    let service = CommandService::new(router, Arc::new(TelegramBotAdapter::new(bot.clone())));

    info!(commands = service.router().len(), "Bot started successfully");

    run_polling(bot, service).await
}
