//! Application layer module
//!
//! This module contains use cases and data transfer objects
//! that orchestrate the domain logic.

pub mod dto;
pub mod errors;
pub mod use_cases;

pub use dto::{CreateActorDto, ListAllActorsRequest};
pub use errors::UseCaseError;
pub use use_cases::{
    CreateActorUseCase, ListAllActorsUseCase, PromoteActorUseCase, ShowActorProfileUseCase,
    UseCaseResult,
};
