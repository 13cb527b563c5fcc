//! Domain entities
//!
//! Contains the core business entities and their logic.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user of the system.
///
/// Only `id` and `is_privileged` carry meaning for access control; the
/// remaining attributes are descriptive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_privileged: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Actor {
    /// Create a new unprivileged actor with a fresh identifier
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            is_privileged: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Grant the privilege flag
    pub fn promote(&mut self) {
        self.is_privileged = true;
        self.updated_at = Utc::now();
    }
}
