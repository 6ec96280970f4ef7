//! Binary for the Web App launcher bot.

use anyhow::Result;
use clap::Parser;
use webapp_bot::{build_router, load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, web_app_url } => {
            let config = load_config(token, web_app_url)?;
            run_bot(config).await
        }
        Commands::Check { token, web_app_url } => {
            let config = load_config(token, web_app_url)?;
            config.validate()?;
            let router = build_router(&config)?;
            println!("config ok: web_app_url={}", config.web_app_url());
            for (command, description) in router.commands() {
                println!("  {} - {}", command, description);
            }
            Ok(())
        }
    }
}
