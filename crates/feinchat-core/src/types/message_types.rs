//! Chat message types

use serde::{Deserialize, Serialize};

/// Message identifier, assigned by the session's monotonic counter.
pub type MessageId = u64;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

/// A single transcript entry. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub sent_at: chrono::DateTime<chrono::Utc>,
}

impl ChatMessage {
    pub fn new(id: MessageId, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            sent_at: chrono::Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}
