//! # Web App launcher bot
//!
//! Wires the command router, the `/start` and `/open` handlers and the Telegram transport.
//! Loads config from env (CLI flags override) and runs the long-polling dispatcher.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use config::{BaseConfig, BotConfig, WebAppConfig};
pub use handlers::{OpenWebAppHandler, StartHandler, GREETING, OPEN_BUTTON_LABEL, OPEN_TEXT};
pub use runner::{build_router, run_bot};
