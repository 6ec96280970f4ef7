//! Core types: chat, user, command, inbound event, reply, and the Handler trait.
//!
//! One file per main type.

mod chat;
mod command;
mod event;
mod handler;
mod reply;
mod user;

pub use chat::Chat;
pub use command::{Command, ParsedCommand, MAX_COMMAND_LEN};
pub use event::InboundEvent;
pub use handler::{Handler, ToInboundEvent};
pub use reply::{Reply, WebAppButton};
pub use user::User;
