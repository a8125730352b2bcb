//! Custom error types for the common library
//!
//! This module defines the domain error taxonomy shared by the identity
//! store and the conversation store. Every variant carries a message that is
//! safe to show to the caller.

use thiserror::Error;

/// Error returned by store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A required field was missing or empty
    #[error("{0}")]
    InvalidInput(String),

    /// The resource already exists (duplicate registration)
    #[error("{0}")]
    Conflict(String),

    /// Missing, malformed or expired token, or bad credentials
    #[error("{0}")]
    Unauthorized(String),

    /// Unknown resource, or one owned by somebody else
    #[error("{0}")]
    NotFound(String),
}

impl StoreError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

/// Type alias for Result with StoreError
pub type StoreResult<T> = Result<T, StoreError>;
