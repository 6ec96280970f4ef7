//! Reply type: text with at most one Web App button.

use serde::{Deserialize, Serialize};
use url::Url;

/// Button that opens `url` as a Telegram Web App when pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppButton {
    pub label: String,
    pub url: Url,
}

/// The bot's response to one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub button: Option<WebAppButton>,
}

impl Reply {
    /// Plain text reply without interactive elements.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            button: None,
        }
    }

    /// Text reply with a single button opening `url`.
    pub fn with_web_app(text: impl Into<String>, label: impl Into<String>, url: Url) -> Self {
        Self {
            text: text.into(),
            button: Some(WebAppButton {
                label: label.into(),
                url,
            }),
        }
    }

    pub fn has_button(&self) -> bool {
        self.button.is_some()
    }
}
