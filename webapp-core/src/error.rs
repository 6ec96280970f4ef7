//! Error types for the bot core.
//!
//! [`BotError`] is the top-level error; [`HandlerError`] covers dispatch failures and
//! [`RegistrationError`] covers building the command table.

use thiserror::Error;

/// Top-level error (transport, handler, registration, config, IO).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced while dispatching a single event. All of them are contained by the router.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    #[error("Unknown command: /{0}")]
    UnknownCommand(String),

    #[error("Handler for /{command} failed: {reason}")]
    Failed { command: String, reason: String },

    #[error("Handler for /{command} panicked: {reason}")]
    Panicked { command: String, reason: String },
}

/// Errors raised while building the command table at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Invalid command name {0:?}: expected 1-32 characters of a-z, 0-9 or _")]
    InvalidName(String),

    #[error("Command /{0} is already registered")]
    Duplicate(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
