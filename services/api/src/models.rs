//! API models for request and response payloads

use serde::{Deserialize, Serialize};

pub mod chat;
pub mod user;

use chat::{Chat, ChatSummary, Message};
use user::UserView;

/// Request for user registration
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(alias = "credential")]
    pub password: Option<String>,
}

/// Request for user login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    #[serde(alias = "credential")]
    pub password: Option<String>,
}

/// Response for signup and login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserView,
}

/// Response for token verification
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub user: UserView,
}

/// Request carrying a user message, for new chats and follow-ups
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub message: String,
}

/// Response for the chat history listing
#[derive(Debug, Serialize)]
pub struct ChatListResponse {
    pub chats: Vec<ChatSummary>,
}

/// Response for a single chat
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub chat: Chat,
}

/// Response for chat creation
#[derive(Debug, Serialize)]
pub struct CreateChatResponse {
    pub chat: Chat,
    pub message: String,
}

/// Response for a follow-up message: the assistant's reply only
#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub message: Message,
    pub chat_id: String,
}
