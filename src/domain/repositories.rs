//! Repository interfaces for the actor domain
//!
//! `ActorDirectory` is the read-only capability access control depends on.
//! `ActorRegistry` adds the write side used to populate a directory.

use async_trait::async_trait;
use anyhow::Result;
use thiserror::Error;
use crate::domain::entities::Actor;

/// Raised by `ActorRegistry::create` when the email is already registered.
///
/// Stores return it inside their `anyhow::Error` so callers can recover it
/// with `downcast_ref`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Email already registered: {email}")]
pub struct DuplicateEmail {
    pub email: String,
}

#[async_trait]
pub trait ActorDirectory: Send + Sync {
    /// Look up one actor. A missing id is `Ok(None)`, never an error.
    async fn find_by_id(&self, actor_id: &str) -> Result<Option<Actor>>;

    /// Every registered actor, in store-defined order.
    async fn list(&self) -> Result<Vec<Actor>>;
}

#[async_trait]
pub trait ActorRegistry: ActorDirectory {
    /// Insert a new actor; a taken email fails with [`DuplicateEmail`].
    async fn create(&self, actor: &Actor) -> Result<()>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Actor>>;
    async fn update(&self, actor: &Actor) -> Result<()>;
}
