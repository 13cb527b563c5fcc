//! Application use cases for the actor domain
//!
//! Each use case owns a handle to the repository capability it needs and
//! exposes a single `execute` entry point.

use std::sync::Arc;

use crate::application::dto::{CreateActorDto, ListAllActorsRequest};
use crate::application::errors::UseCaseError;
use crate::domain::entities::Actor;
use crate::domain::repositories::{ActorDirectory, ActorRegistry, DuplicateEmail};

pub type UseCaseResult<T> = std::result::Result<T, UseCaseError>;

// ============================================================================
// Listing
// ============================================================================

/// Lists every registered actor on behalf of a privileged requester
pub struct ListAllActorsUseCase {
    directory: Arc<dyn ActorDirectory>,
}

impl ListAllActorsUseCase {
    pub fn new(directory: Arc<dyn ActorDirectory>) -> Self {
        Self { directory }
    }

    /// Resolve the requester, require the privilege flag, then return the
    /// directory listing exactly as the directory produced it.
    pub async fn execute(&self, request: ListAllActorsRequest) -> UseCaseResult<Vec<Actor>> {
        let actor_id = request.requester_id.lookup_key();

        let requester = self
            .directory
            .find_by_id(&actor_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(&*actor_id))?;

        if !requester.is_privileged {
            return Err(UseCaseError::permission_denied(requester.id));
        }

        Ok(self.directory.list().await?)
    }
}

// ============================================================================
// Registry management
// ============================================================================

/// Registers a new, unprivileged actor
pub struct CreateActorUseCase {
    registry: Arc<dyn ActorRegistry>,
}

impl CreateActorUseCase {
    pub fn new(registry: Arc<dyn ActorRegistry>) -> Self {
        Self { registry }
    }

    pub async fn execute(&self, dto: CreateActorDto) -> UseCaseResult<Actor> {
        let name = dto.name.trim();
        let email = dto.email.trim();

        if name.is_empty() {
            return Err(UseCaseError::invalid_input("name", "must not be empty"));
        }
        if email.is_empty() {
            return Err(UseCaseError::invalid_input("email", "must not be empty"));
        }

        if self.registry.find_by_email(email).await?.is_some() {
            return Err(UseCaseError::AlreadyExists { email: email.to_string() });
        }

        let actor = Actor::new(name, email);
        // Another writer may take the email between the lookup and the insert
        self.registry.create(&actor).await.map_err(|e| {
            match e.downcast_ref::<DuplicateEmail>() {
                Some(duplicate) => UseCaseError::AlreadyExists { email: duplicate.email.clone() },
                None => UseCaseError::Directory(e),
            }
        })?;

        Ok(actor)
    }
}

/// Grants the privilege flag to an existing actor
pub struct PromoteActorUseCase {
    registry: Arc<dyn ActorRegistry>,
}

impl PromoteActorUseCase {
    pub fn new(registry: Arc<dyn ActorRegistry>) -> Self {
        Self { registry }
    }

    pub async fn execute(&self, actor_id: &str) -> UseCaseResult<Actor> {
        let mut actor = self
            .registry
            .find_by_id(actor_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(actor_id))?;

        if actor.is_privileged {
            return Ok(actor);
        }

        actor.promote();
        self.registry.update(&actor).await?;

        Ok(actor)
    }
}

/// Fetches a single actor's profile
pub struct ShowActorProfileUseCase {
    directory: Arc<dyn ActorDirectory>,
}

impl ShowActorProfileUseCase {
    pub fn new(directory: Arc<dyn ActorDirectory>) -> Self {
        Self { directory }
    }

    pub async fn execute(&self, actor_id: &str) -> UseCaseResult<Actor> {
        self.directory
            .find_by_id(actor_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found(actor_id))
    }
}
