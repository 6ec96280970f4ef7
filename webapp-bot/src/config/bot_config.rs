//! BotConfig: BaseConfig + WebAppConfig. Use load() for env-based loading.

use anyhow::Result;
use reqwest::Url;
use webapp_telegram::TelegramConfig;

use super::{BaseConfig, WebAppConfig};

/// Bot config, built once at startup and passed by reference. Use BotConfig::load() for
/// env-based loading.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub web_app: WebAppConfig,
}

impl BotConfig {
    /// Load full config from environment variables. `token` overrides BOT_TOKEN and
    /// `web_app_url` overrides WEB_APP_URL when provided.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>, web_app_url: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let web_app = WebAppConfig::from_env(web_app_url)?;
        Ok(Self { base, web_app })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.web_app.validate()
    }

    /// Connectivity part handed to the Telegram transport.
    pub fn telegram_config(&self) -> &TelegramConfig {
        &self.base.telegram
    }

    pub fn bot_token(&self) -> &str {
        &self.base.telegram.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram.telegram_api_url.as_deref()
    }
    pub fn web_app_url(&self) -> &Url {
        &self.web_app.web_app_url
    }
    pub fn unknown_command_reply(&self) -> Option<&str> {
        self.web_app.unknown_command_reply.as_deref()
    }
}
