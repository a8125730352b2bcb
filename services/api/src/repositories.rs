//! Repositories for the in-memory stores

pub mod chat;
pub mod user;

pub use chat::ChatRepository;
pub use user::UserRepository;
