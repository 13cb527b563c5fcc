//! Infrastructure layer for database connections, configuration and logging
//!
//! This module provides the concrete actor directories and the process-level
//! plumbing the binary wires together.

pub mod config;
pub mod database_connection;
pub mod in_memory_repository;
pub mod logging;
pub mod repositories;

// Re-export commonly used items
pub use config::{AppConfig, ConfigManager, ConfigRecovery, DatabaseConfig, LoadedConfig, LoggingConfig};
pub use database_connection::DatabaseConnection;
pub use in_memory_repository::InMemoryActorDirectory;
pub use logging::init_logging_with_config;
pub use repositories::SqliteActorDirectory;
