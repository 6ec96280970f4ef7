//! Web App config: the URL opened by the `/open` button and the optional reply for unknown commands.

use anyhow::{Context, Result};
use reqwest::Url;
use std::env;

/// Web App settings. Loaded from WEB_APP_URL and UNKNOWN_COMMAND_REPLY.
#[derive(Debug, Clone)]
pub struct WebAppConfig {
    /// WEB_APP_URL: destination opened when the button is pressed.
    pub web_app_url: Url,
    /// UNKNOWN_COMMAND_REPLY: text sent for unregistered commands; None keeps the bot silent.
    pub unknown_command_reply: Option<String>,
}

impl WebAppConfig {
    /// Load from environment variables. `web_app_url` overrides WEB_APP_URL if provided.
    pub fn from_env(web_app_url: Option<String>) -> Result<Self> {
        let raw = match web_app_url {
            Some(url) => url,
            None => env::var("WEB_APP_URL").map_err(|_| anyhow::anyhow!("WEB_APP_URL not set"))?,
        };
        let web_app_url = Url::parse(raw.trim())
            .with_context(|| format!("WEB_APP_URL is not a valid URL: {}", raw))?;
        let unknown_command_reply = env::var("UNKNOWN_COMMAND_REPLY")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Ok(Self {
            web_app_url,
            unknown_command_reply,
        })
    }

    /// Telegram only opens Web Apps served over HTTPS.
    pub fn validate(&self) -> Result<()> {
        if self.web_app_url.scheme() != "https" {
            anyhow::bail!(
                "WEB_APP_URL must use https (Telegram rejects other schemes): {}",
                self.web_app_url
            );
        }
        if self.web_app_url.host_str().map_or(true, str::is_empty) {
            anyhow::bail!("WEB_APP_URL has no host: {}", self.web_app_url);
        }
        Ok(())
    }
}
