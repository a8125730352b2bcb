//! Application state shared across handlers

use std::sync::Arc;

use crate::{
    generator::ResponseGenerator,
    jwt::JwtService,
    repositories::{ChatRepository, UserRepository},
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub jwt_service: JwtService,
    pub user_repository: UserRepository,
    pub chat_repository: ChatRepository,
}

impl AppState {
    /// Build empty stores around a token service and a reply generator
    pub fn new(jwt_service: JwtService, generator: Arc<dyn ResponseGenerator>) -> Self {
        Self {
            jwt_service,
            user_repository: UserRepository::new(),
            chat_repository: ChatRepository::new(generator),
        }
    }
}
