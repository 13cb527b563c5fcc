//! Command handlers
//!
//! Bridges parsed CLI commands to the application use cases. Handlers share
//! one `CommandContext` holding the actor registry.

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::application::{
    CreateActorDto, CreateActorUseCase, ListAllActorsRequest, ListAllActorsUseCase,
    PromoteActorUseCase, ShowActorProfileUseCase, UseCaseError, UseCaseResult,
};
use crate::cli::Command;
use crate::domain::{Actor, ActorDirectory, ActorRegistry, RequesterId};
use crate::infrastructure::{DatabaseConfig, DatabaseConnection, SqliteActorDirectory};

/// Result payload printed by the binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    Actors(Vec<Actor>),
    Actor(Actor),
}

pub struct CommandContext {
    directory: Arc<dyn ActorDirectory>,
    registry: Arc<dyn ActorRegistry>,
}

impl CommandContext {
    pub fn new<R>(store: Arc<R>) -> Self
    where
        R: ActorRegistry + 'static,
    {
        Self {
            directory: store.clone(),
            registry: store,
        }
    }

    /// Open the SQLite directory described by the configuration
    pub async fn open(config: &DatabaseConfig) -> Result<Self> {
        let database_url = config.database_url()?;
        let db = DatabaseConnection::with_max_connections(&database_url, config.max_connections).await?;
        db.migrate().await?;

        info!("Actor directory ready at {}", database_url);
        Ok(Self::new(Arc::new(SqliteActorDirectory::new(db.pool().clone()))))
    }

    pub async fn dispatch(&self, command: Command) -> UseCaseResult<CommandOutput> {
        match command {
            Command::List { requester_id } => {
                let actors = self.list_all_actors(requester_id).await?;
                Ok(CommandOutput::Actors(actors))
            }
            Command::Create { name, email } => {
                let actor = CreateActorUseCase::new(self.registry.clone())
                    .execute(CreateActorDto { name, email })
                    .await?;
                info!("Created actor {}", actor.id);
                Ok(CommandOutput::Actor(actor))
            }
            Command::Promote { actor_id } => {
                let actor = PromoteActorUseCase::new(self.registry.clone())
                    .execute(&actor_id)
                    .await?;
                info!("Actor {} is privileged", actor.id);
                Ok(CommandOutput::Actor(actor))
            }
            Command::Show { actor_id } => {
                let actor = ShowActorProfileUseCase::new(self.directory.clone())
                    .execute(&actor_id)
                    .await?;
                Ok(CommandOutput::Actor(actor))
            }
        }
    }

    async fn list_all_actors(&self, mut ids: Vec<String>) -> UseCaseResult<Vec<Actor>> {
        let requester_id = if ids.len() == 1 {
            RequesterId::Single(ids.remove(0))
        } else {
            RequesterId::Many(ids)
        };
        debug!("Listing actors on behalf of {}", requester_id);

        ListAllActorsUseCase::new(self.directory.clone())
            .execute(ListAllActorsRequest { requester_id })
            .await
    }
}

/// Process exit code for a failed command
pub const fn exit_code(error: &UseCaseError) -> u8 {
    match error {
        UseCaseError::NotFound { .. } => 2,
        UseCaseError::PermissionDenied { .. } => 3,
        _ => 1,
    }
}
