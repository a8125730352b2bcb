//! Chat and message models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Titles longer than this many characters are cut and suffixed with `...`
pub const TITLE_MAX_CHARS: usize = 50;

/// Author of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single immutable turn in a chat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub role: Role,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a message with a fresh `msg-` id
    pub fn new(role: Role, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: format!("msg-{}", Uuid::new_v4()),
            content: content.into(),
            role,
            timestamp,
        }
    }
}

/// A titled conversation owned by one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub messages: Vec<Message>,
}

impl Chat {
    /// Start a chat from its opening exchange
    ///
    /// The title is derived from the user's text and both messages share the
    /// chat's creation timestamp.
    pub fn open(first_message: &str, reply: String, now: DateTime<Utc>) -> Self {
        Self {
            id: format!("chat-{}", Uuid::new_v4()),
            title: derive_title(first_message),
            created_at: now,
            updated_at: now,
            messages: vec![
                Message::new(Role::User, first_message, now),
                Message::new(Role::Assistant, reply, now),
            ],
        }
    }
}

/// Chat listing entry without messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSummary {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Chat> for ChatSummary {
    fn from(chat: &Chat) -> Self {
        Self {
            id: chat.id.clone(),
            title: chat.title.clone(),
            created_at: chat.created_at,
            updated_at: chat.updated_at,
        }
    }
}

/// Derive a chat title from the first message, counting characters, not bytes
pub fn derive_title(text: &str) -> String {
    match text.char_indices().nth(TITLE_MAX_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
