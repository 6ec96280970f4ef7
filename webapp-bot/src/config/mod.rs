//! Bot configuration: BaseConfig (Telegram + log) + WebAppConfig (Web App URL, unknown-command reply).

mod base;
mod bot_config;
mod web_app;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use web_app::WebAppConfig;
