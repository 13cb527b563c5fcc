//! Actor Roster - privilege-gated actor directory
//!
//! Registered actors live in an actor directory. Only an actor carrying the
//! privilege flag may list every registered actor.

// Module declarations
pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod cli;
pub mod commands;
