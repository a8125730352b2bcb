//! Common library for the chat backend
//!
//! This crate provides functionality shared by the services: the domain
//! error taxonomy, layered configuration loading and logging setup.

pub mod config;
pub mod error;
pub mod logging;

pub use config::AppConfig;
pub use error::{StoreError, StoreResult};
