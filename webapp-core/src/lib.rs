//! # webapp-core
//!
//! Core types and traits for the Web App launcher bot: [`Command`], [`InboundEvent`], [`Reply`],
//! the [`Handler`] and [`Bot`] traits, error types and tracing initialization.
//! Transport-agnostic; used by command-router and webapp-telegram.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, HandlerError, RegistrationError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Command, Handler, InboundEvent, ParsedCommand, Reply, ToInboundEvent, User,
    WebAppButton, MAX_COMMAND_LEN,
};
