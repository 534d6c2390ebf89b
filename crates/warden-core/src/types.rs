use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque chat identifier (Telegram chat IDs are signed 64-bit; groups are negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatRef(pub i64);

impl fmt::Display for ChatRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ChatRef {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Opaque author identifier (Telegram user IDs are unsigned 64-bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorId(pub u64);

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AuthorId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Handle to one message within one chat — enough to delete it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageRef {
    pub chat: ChatRef,
    pub id: i32,
}

impl MessageRef {
    pub fn new(chat: ChatRef, id: i32) -> Self {
        Self { chat, id }
    }
}

impl fmt::Display for MessageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.chat, self.id)
    }
}
