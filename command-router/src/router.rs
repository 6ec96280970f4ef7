//! Command table and dispatch.

use std::any::Any;
use std::collections::BTreeMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{error, info, instrument};
use webapp_core::{Command, Handler, HandlerError, InboundEvent, RegistrationError, Reply};

/// Static command table: one handler per command name, optional fallback for unknown commands.
#[derive(Clone, Default)]
pub struct CommandRouter {
    handlers: BTreeMap<Command, Arc<dyn Handler>>,
    fallback: Option<Reply>,
}

impl CommandRouter {
    /// Creates an empty router. Unknown commands get no reply.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replies with `reply` to commands that have no handler instead of staying silent.
    pub fn with_fallback(mut self, reply: Reply) -> Self {
        self.fallback = Some(reply);
        self
    }

    /// Registers `handler` for the command `name` (leading `/` optional, case-insensitive).
    ///
    /// A second registration for the same name is rejected and the first handler stays in place.
    pub fn register(
        mut self,
        name: &str,
        handler: Arc<dyn Handler>,
    ) -> Result<Self, RegistrationError> {
        let command = Command::new(name)?;
        if self.handlers.contains_key(&command) {
            return Err(RegistrationError::Duplicate(command.as_str().to_string()));
        }
        info!(
            command = %command,
            handler = %std::any::type_name_of_val(handler.as_ref()),
            "Registered command"
        );
        self.handlers.insert(command, handler);
        Ok(self)
    }

    pub fn contains(&self, command: &Command) -> bool {
        self.handlers.contains_key(command)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered commands and their descriptions, ordered by name.
    pub fn commands(&self) -> Vec<(Command, String)> {
        self.handlers
            .iter()
            .map(|(command, handler)| (command.clone(), handler.description().to_string()))
            .collect()
    }

    /// Resolves and runs the handler for `event`. Never fails: unknown commands yield the
    /// fallback (if any), handler errors and panics are logged and yield `None`.
    #[instrument(skip(self, event), fields(chat_id = event.chat.id, user_id = event.user_id(), command = %event.command))]
    pub async fn dispatch(&self, event: &InboundEvent) -> Option<Reply> {
        match self.try_dispatch(event).await {
            Ok(reply) => Some(reply),
            Err(HandlerError::UnknownCommand(name)) => {
                info!(
                    command = %name,
                    has_fallback = self.fallback.is_some(),
                    "step: unknown command"
                );
                self.fallback.clone()
            }
            Err(e) => {
                error!(error = %e, "step: handler failed, no reply");
                None
            }
        }
    }

    /// Like [`dispatch`](Self::dispatch) but reports why no reply was produced.
    pub async fn try_dispatch(&self, event: &InboundEvent) -> Result<Reply, HandlerError> {
        let command = event.command.as_str();
        let handler = self
            .handlers
            .get(&event.command)
            .ok_or_else(|| HandlerError::UnknownCommand(command.to_string()))?;
        let handler_name = std::any::type_name_of_val(handler.as_ref());
        info!(handler = %handler_name, "step: handler processing");

        match AssertUnwindSafe(handler.handle(event)).catch_unwind().await {
            Ok(Ok(reply)) => {
                info!(
                    handler = %handler_name,
                    reply_len = reply.text.len(),
                    has_button = reply.has_button(),
                    "step: handler done"
                );
                Ok(reply)
            }
            Ok(Err(e)) => Err(HandlerError::Failed {
                command: command.to_string(),
                reason: e.to_string(),
            }),
            Err(panic) => Err(HandlerError::Panicked {
                command: command.to_string(),
                reason: panic_message(panic.as_ref()),
            }),
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
