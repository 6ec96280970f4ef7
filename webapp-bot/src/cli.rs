//! CLI: run the bot or check its configuration. Values from env; flags override.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "webapp-bot")]
#[command(about = "Telegram bot that launches a Web App: run, check", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; flags override BOT_TOKEN and WEB_APP_URL).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        #[arg(short, long)]
        web_app_url: Option<String>,
    },
    /// Load and validate config, print the registered commands, then exit.
    Check {
        #[arg(short, long)]
        token: Option<String>,
        #[arg(short, long)]
        web_app_url: Option<String>,
    },
}

/// Loads config from env with optional CLI overrides.
pub fn load_config(token: Option<String>, web_app_url: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token, web_app_url)
}
