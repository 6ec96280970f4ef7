//! Dispatch plus delivery: runs the router for an event and sends the reply to the same chat.

use std::sync::Arc;

use tracing::{error, info, instrument};
use webapp_core::{Bot, InboundEvent, Reply, Result};

use crate::CommandRouter;

/// Router and outbound transport, shared by every update task.
#[derive(Clone)]
pub struct CommandService {
    router: Arc<CommandRouter>,
    bot: Arc<dyn Bot>,
}

impl CommandService {
    pub fn new(router: Arc<CommandRouter>, bot: Arc<dyn Bot>) -> Self {
        Self { router, bot }
    }

    pub fn router(&self) -> &CommandRouter {
        &self.router
    }

    /// Dispatches `event` and delivers the reply, if any, as an answer to it in `event.chat`.
    ///
    /// Returns the reply that was sent. Only delivery failures are returned as errors.
    #[instrument(skip(self, event), fields(chat_id = event.chat.id, message_id = %event.id))]
    pub async fn process(&self, event: &InboundEvent) -> Result<Option<Reply>> {
        let Some(reply) = self.router.dispatch(event).await else {
            info!(command = %event.command, "step: no reply");
            return Ok(None);
        };

        if let Err(e) = self.bot.reply_to(event, &reply).await {
            error!(error = %e, command = %event.command, "step: reply delivery failed");
            return Err(e);
        }
        info!(
            command = %event.command,
            has_button = reply.has_button(),
            "step: reply sent"
        );
        Ok(Some(reply))
    }
}
