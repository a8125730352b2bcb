//! Chat repository: the in-memory conversation store
//!
//! Each user owns one chat collection behind its own `RwLock`, so writers for
//! one user are serialised while other users never contend on that lock. The
//! response generator always runs with no lock held; its output is committed
//! in a single critical section afterwards.

use chrono::Utc;
use common::{StoreError, StoreResult};
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    generator::ResponseGenerator,
    models::chat::{Chat, ChatSummary, Message, Role},
    validation::validate_message,
};

/// Error message for a missing or foreign chat
pub const CHAT_NOT_FOUND: &str = "Chat not found";

/// Most recently created first
type ChatCollection = Arc<RwLock<Vec<Chat>>>;

/// Assistant reply produced by a follow-up message
#[derive(Debug, Clone)]
pub struct AppendedReply {
    pub chat_id: String,
    pub message: Message,
}

/// Chat repository
#[derive(Clone)]
pub struct ChatRepository {
    collections: Arc<DashMap<String, ChatCollection>>,
    generator: Arc<dyn ResponseGenerator>,
}

impl ChatRepository {
    /// Create an empty chat repository replying through `generator`
    pub fn new(generator: Arc<dyn ResponseGenerator>) -> Self {
        Self {
            collections: Arc::new(DashMap::new()),
            generator,
        }
    }

    /// Collection of an existing user, if any
    fn existing(&self, user_id: &str) -> Option<ChatCollection> {
        self.collections
            .get(user_id)
            .map(|collection| Arc::clone(collection.value()))
    }

    /// Collection of a user, created empty on first use
    fn collection(&self, user_id: &str) -> ChatCollection {
        let entry = self.collections.entry(user_id.to_string()).or_default();
        Arc::clone(entry.value())
    }

    /// Allocate an empty collection for a newly registered user
    pub fn ensure_user(&self, user_id: &str) {
        self.collection(user_id);
    }

    /// List a user's chats without their messages
    pub async fn list_chats(&self, user_id: &str) -> Vec<ChatSummary> {
        let Some(collection) = self.existing(user_id) else {
            return Vec::new();
        };

        let chats = collection.read().await;
        chats.iter().map(ChatSummary::from).collect()
    }

    /// Get one of the user's chats with all of its messages
    pub async fn get_chat(&self, user_id: &str, chat_id: &str) -> StoreResult<Chat> {
        let collection = self
            .existing(user_id)
            .ok_or_else(|| StoreError::not_found(CHAT_NOT_FOUND))?;

        let chats = collection.read().await;
        chats
            .iter()
            .find(|chat| chat.id == chat_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(CHAT_NOT_FOUND))
    }

    /// Start a new chat from its first message
    ///
    /// The assistant reply is generated before the chat becomes visible; the
    /// chat is then placed at the head of the user's collection.
    pub async fn create_chat(&self, user_id: &str, text: &str) -> StoreResult<Chat> {
        validate_message(text)?;

        let reply = self.generator.generate(text, &[]).await;
        let chat = Chat::open(text, reply, Utc::now());

        let collection = self.collection(user_id);
        collection.write().await.insert(0, chat.clone());

        info!("User {} created chat {}", user_id, chat.id);
        Ok(chat)
    }

    /// Add a user message and its assistant reply to an existing chat
    ///
    /// The chat keeps its position in the collection. If it is deleted while
    /// the reply is being generated, nothing is appended.
    pub async fn append_message(
        &self,
        user_id: &str,
        chat_id: &str,
        text: &str,
    ) -> StoreResult<AppendedReply> {
        validate_message(text)?;

        let history = self.get_chat(user_id, chat_id).await?.messages;
        let reply = self.generator.generate(text, &history).await;

        let collection = self
            .existing(user_id)
            .ok_or_else(|| StoreError::not_found(CHAT_NOT_FOUND))?;
        let mut chats = collection.write().await;
        let chat = chats
            .iter_mut()
            .find(|chat| chat.id == chat_id)
            .ok_or_else(|| StoreError::not_found(CHAT_NOT_FOUND))?;

        let now = Utc::now().max(chat.updated_at);
        let assistant = Message::new(Role::Assistant, reply, now);
        chat.messages.push(Message::new(Role::User, text, now));
        chat.messages.push(assistant.clone());
        chat.updated_at = now;

        Ok(AppendedReply {
            chat_id: chat.id.clone(),
            message: assistant,
        })
    }

    /// Delete one chat; deleting it again reports `NotFound`
    pub async fn delete_chat(&self, user_id: &str, chat_id: &str) -> StoreResult<()> {
        let collection = self
            .existing(user_id)
            .ok_or_else(|| StoreError::not_found(CHAT_NOT_FOUND))?;

        let mut chats = collection.write().await;
        let position = chats
            .iter()
            .position(|chat| chat.id == chat_id)
            .ok_or_else(|| StoreError::not_found(CHAT_NOT_FOUND))?;
        chats.remove(position);

        info!("User {} deleted chat {}", user_id, chat_id);
        Ok(())
    }

    /// Remove every chat of a user; always succeeds
    pub async fn clear_all(&self, user_id: &str) {
        let collection = self.collection(user_id);
        let removed = {
            let mut chats = collection.write().await;
            std::mem::take(&mut *chats).len()
        };

        info!("User {} cleared {} chats", user_id, removed);
    }

    /// Replace a user's collection with prepared chats, kept in the given order
    pub async fn restore(&self, user_id: &str, chats: Vec<Chat>) {
        let collection = self.collection(user_id);
        *collection.write().await = chats;
    }
}
