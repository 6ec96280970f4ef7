//! `/start`: fixed greeting, no button.

use async_trait::async_trait;
use webapp_core::{Handler, InboundEvent, Reply, Result};

pub const GREETING: &str = "Hi! I'm your bot. Use /open to open the web view.";

/// Replies to `/start` with [`GREETING`]. Ignores the event contents.
#[derive(Clone, Default)]
pub struct StartHandler;

impl StartHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for StartHandler {
    fn description(&self) -> &str {
        "Start the bot"
    }

    async fn handle(&self, _event: &InboundEvent) -> Result<Reply> {
        Ok(Reply::text(GREETING))
    }
}
