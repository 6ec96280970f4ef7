//! Base config: Telegram Bot connection and logging. Loaded from env.

use anyhow::Result;
use std::env;
use webapp_telegram::TelegramConfig;

/// Base config: Telegram-related and logging only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN and TELEGRAM_API_URL / TELOXIDE_API_URL; Debug redacts the token.
    pub telegram: TelegramConfig,
    /// Log file path
    pub log_file: String,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/webapp-bot.log".to_string());

        Ok(Self { telegram, log_file })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()
    }
}
