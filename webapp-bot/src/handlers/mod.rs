//! Command handlers: `/start` greeting and `/open` Web App launcher.

mod open;
mod start;

pub use open::{OpenWebAppHandler, OPEN_BUTTON_LABEL, OPEN_TEXT};
pub use start::{StartHandler, GREETING};
