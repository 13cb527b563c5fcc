//! Use case error types
//!
//! Caller-caused failures are distinct variants. Anything raised by the
//! actor store is carried unchanged in `Directory`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UseCaseError {
    #[error("Actor not found: {actor_id}")]
    NotFound { actor_id: String },

    #[error("Actor {actor_id} doesn't have permission to do that")]
    PermissionDenied { actor_id: String },

    #[error("Actor already exists: {email}")]
    AlreadyExists { email: String },

    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Actor directory failure: {0}")]
    Directory(#[from] anyhow::Error),
}

impl UseCaseError {
    pub fn not_found(actor_id: impl Into<String>) -> Self {
        Self::NotFound { actor_id: actor_id.into() }
    }

    pub fn permission_denied(actor_id: impl Into<String>) -> Self {
        Self::PermissionDenied { actor_id: actor_id.into() }
    }

    pub fn invalid_input(field: &str, reason: &str) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Caller-caused failures; repeating the same request yields the same result
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Directory(_))
    }
}
