//! Command names and parsing of `/command@bot args` message text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RegistrationError;

/// Longest command name Telegram accepts.
pub const MAX_COMMAND_LEN: usize = 32;

/// A validated command name, stored lowercase without the leading `/`.
///
/// Valid names are 1-32 characters of `a-z`, `0-9` and `_`. Input is matched case-insensitively,
/// so `Command::new("/Start")` and `Command::new("start")` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Command(String);

impl Command {
    pub fn new(name: impl AsRef<str>) -> Result<Self, RegistrationError> {
        let raw = name.as_ref();
        let normalized = raw.strip_prefix('/').unwrap_or(raw).to_ascii_lowercase();
        let valid = !normalized.is_empty()
            && normalized.len() <= MAX_COMMAND_LEN
            && normalized
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_');
        if !valid {
            return Err(RegistrationError::InvalidName(raw.to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0)
    }
}

impl FromStr for Command {
    type Err = RegistrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Command {
    type Error = RegistrationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Command> for String {
    fn from(command: Command) -> Self {
        command.0
    }
}

/// A command extracted from message text, with whatever followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub command: Command,
    pub args: String,
}

fn is_command_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Splits `s` after its leading run of command characters.
fn split_command_run(s: &str) -> (&str, &str) {
    s.split_at(s.find(|c| !is_command_char(c)).unwrap_or(s.len()))
}

impl ParsedCommand {
    /// Parses `/name[@bot] [args]`.
    ///
    /// The name is the leading run of `A-Z`, `a-z`, `0-9` and `_` after the slash, the same span
    /// Telegram marks as a `bot_command` entity. Anything after it (and after an optional `@bot`)
    /// is the argument text, so `/open.` and `/start!` are still commands.
    ///
    /// Returns `None` when the text is not a command, the name is invalid, or the command is
    /// addressed to a bot other than `bot_username`. When `bot_username` is unknown any `@bot`
    /// suffix is accepted.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let body = text.strip_prefix('/')?;
        let (name, mut rest) = split_command_run(body);
        let mut target = None;
        if let Some(after_at) = rest.strip_prefix('@') {
            let (bot, after_bot) = split_command_run(after_at);
            if !bot.is_empty() {
                target = Some(bot);
                rest = after_bot;
            }
        }
        if let (Some(target), Some(me)) = (target, bot_username) {
            if !target.eq_ignore_ascii_case(me.trim_start_matches('@')) {
                return None;
            }
        }
        let command = Command::new(name).ok()?;
        Some(Self {
            command,
            args: rest.trim().to_string(),
        })
    }
}
