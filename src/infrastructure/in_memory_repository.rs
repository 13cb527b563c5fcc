//! In-memory actor directory
//!
//! Keeps actors in insertion order behind an async `RwLock`. Used for tests
//! and for wiring the use cases without a database.

use async_trait::async_trait;
use anyhow::{Result, anyhow};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::Actor;
use crate::domain::repositories::{ActorDirectory, ActorRegistry, DuplicateEmail};

#[derive(Debug, Default)]
pub struct InMemoryActorDirectory {
    actors: RwLock<Vec<Actor>>,
}

impl InMemoryActorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_actors(actors: Vec<Actor>) -> Self {
        Self { actors: RwLock::new(actors) }
    }
}

#[async_trait]
impl ActorDirectory for InMemoryActorDirectory {
    async fn find_by_id(&self, actor_id: &str) -> Result<Option<Actor>> {
        let actors = self.actors.read().await;
        Ok(actors.iter().find(|actor| actor.id == actor_id).cloned())
    }

    async fn list(&self) -> Result<Vec<Actor>> {
        Ok(self.actors.read().await.clone())
    }
}

#[async_trait]
impl ActorRegistry for InMemoryActorDirectory {
    async fn create(&self, actor: &Actor) -> Result<()> {
        let mut actors = self.actors.write().await;
        if actors.iter().any(|existing| existing.id == actor.id) {
            return Err(anyhow!("Actor id already in use: {}", actor.id));
        }
        if actors.iter().any(|existing| existing.email == actor.email) {
            return Err(DuplicateEmail { email: actor.email.clone() }.into());
        }
        actors.push(actor.clone());
        debug!("Registered actor {} ({} total)", actor.id, actors.len());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Actor>> {
        let actors = self.actors.read().await;
        Ok(actors.iter().find(|actor| actor.email == email).cloned())
    }

    async fn update(&self, actor: &Actor) -> Result<()> {
        let mut actors = self.actors.write().await;
        let slot = actors
            .iter_mut()
            .find(|existing| existing.id == actor.id)
            .ok_or_else(|| anyhow!("Cannot update unknown actor: {}", actor.id))?;
        *slot = actor.clone();
        Ok(())
    }
}
