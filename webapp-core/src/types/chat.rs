//! Chat identity type.

use serde::{Deserialize, Serialize};

/// Chat (private, group or channel) identity. Replies are always sent back to the originating chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

impl Chat {
    pub fn new(id: i64, chat_type: impl Into<String>) -> Self {
        Self {
            id,
            chat_type: chat_type.into(),
        }
    }

    /// A private (one-to-one) chat.
    pub fn private(id: i64) -> Self {
        Self::new(id, "private")
    }
}
