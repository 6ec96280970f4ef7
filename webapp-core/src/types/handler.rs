//! Handler trait and transport conversion trait.

use async_trait::async_trait;

use super::{event::InboundEvent, reply::Reply};

/// Converts a transport-specific message into an [`InboundEvent`].
///
/// Returns `None` for messages that are not commands for this bot. `bot_username` is used to
/// drop `/command@otherbot` in group chats.
pub trait ToInboundEvent: Send + Sync {
    fn to_inbound_event(&self, bot_username: Option<&str>) -> Option<InboundEvent>;
}

/// Logic bound to a single command. Builds the reply for one event; holds only immutable data,
/// so one instance serves all chats concurrently.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Short text shown next to the command in the Telegram command menu.
    fn description(&self) -> &str {
        ""
    }

    /// Builds the reply for `event`. Errors are logged by the router and produce no reply.
    async fn handle(&self, event: &InboundEvent) -> crate::error::Result<Reply>;
}
