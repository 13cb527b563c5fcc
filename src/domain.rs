//! Domain module - Core business logic and entities
//!
//! This module contains the actor entity, boundary value objects,
//! and the repository capabilities the application layer depends on.

pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-export commonly used items for convenience
pub use entities::Actor;
pub use repositories::{ActorDirectory, ActorRegistry, DuplicateEmail};
pub use value_objects::RequesterId;
