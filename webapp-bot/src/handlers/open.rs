//! `/open`: instruction text plus one button launching the configured Web App.

use async_trait::async_trait;
use reqwest::Url;
use webapp_core::{Handler, InboundEvent, Reply, Result};

pub const OPEN_TEXT: &str = "Click the button below to open the web view:";
pub const OPEN_BUTTON_LABEL: &str = "Open Web App";

/// Replies to `/open` with [`OPEN_TEXT`] and an [`OPEN_BUTTON_LABEL`] button opening `url`.
#[derive(Clone)]
pub struct OpenWebAppHandler {
    url: Url,
}

impl OpenWebAppHandler {
    pub fn new(url: Url) -> Self {
        Self { url }
    }
}

#[async_trait]
impl Handler for OpenWebAppHandler {
    fn description(&self) -> &str {
        "Open the web app"
    }

    async fn handle(&self, _event: &InboundEvent) -> Result<Reply> {
        Ok(Reply::with_web_app(
            OPEN_TEXT,
            OPEN_BUTTON_LABEL,
            self.url.clone(),
        ))
    }
}
