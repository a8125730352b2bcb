//! Demo account and sample chats loaded at startup

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    models::{chat::Chat, user::NewUser},
    state::AppState,
};

const DEMO_CHATS: &str = include_str!("../data/demo_chats.json");

/// Credentials of the demo account
pub fn demo_user() -> NewUser {
    NewUser {
        name: "John Doe".to_string(),
        email: "user@example.com".to_string(),
        password: "password123".to_string(),
    }
}

/// Parse the bundled sample chats, most recent last
pub fn demo_chats() -> Result<Vec<Chat>> {
    serde_json::from_str(DEMO_CHATS).context("Failed to parse bundled demo chats")
}

/// Register the demo user and give them the sample chats
pub async fn seed_demo_data(state: &AppState) -> Result<()> {
    let user = state
        .user_repository
        .register(&demo_user())
        .context("Failed to register demo user")?;
    let chats = demo_chats()?;
    let count = chats.len();

    state.chat_repository.restore(&user.id, chats).await;

    info!(
        "Seeded demo user {} ({}) with {} chats; {} users registered",
        user.id,
        user.email,
        count,
        state.user_repository.count()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        generator::FixedResponseGenerator,
        jwt::{JwtConfig, JwtService},
        models::chat::Role,
    };
    use std::sync::Arc;

    fn state() -> AppState {
        let jwt_service = JwtService::new(JwtConfig {
            secret: "test-secret".to_string(),
            token_expiry: 3600,
        });
        AppState::new(jwt_service, Arc::new(FixedResponseGenerator::new("ok")))
    }

    #[test]
    fn test_demo_chats_parse_in_listing_order() {
        let chats = demo_chats().unwrap();
        let ids: Vec<_> = chats.iter().map(|chat| chat.id.as_str()).collect();
        assert_eq!(ids, ["chat-1", "chat-2", "chat-3"]);
        assert_eq!(chats[0].messages[0].id, "msg-1");
        assert_eq!(chats[0].messages[0].role, Role::Assistant);
        assert_eq!(chats[2].messages[1].id, "msg-7");
    }

    #[tokio::test]
    async fn test_seed_registers_demo_user_first() {
        let state = state();
        seed_demo_data(&state).await.unwrap();

        let user = state
            .user_repository
            .authenticate("user@example.com", "password123")
            .unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.name, "John Doe");

        let summaries = state.chat_repository.list_chats(&user.id).await;
        let titles: Vec<_> = summaries.iter().map(|chat| chat.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Welcome to ChatGPT",
                "Python Programming Help",
                "Machine Learning Basics"
            ]
        );
    }

    #[tokio::test]
    async fn test_seed_twice_conflicts() {
        let state = state();
        seed_demo_data(&state).await.unwrap();
        assert!(seed_demo_data(&state).await.is_err());
    }
}
