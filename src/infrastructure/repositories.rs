//! Repository implementations for the actor domain
//!
//! SQLite-backed implementation of the actor directory and registry.

use async_trait::async_trait;
use sqlx::{SqlitePool, Row};
use chrono::{DateTime, Utc};
use anyhow::{Result, anyhow};
use tracing::debug;
use crate::domain::{
    entities::Actor,
    repositories::{ActorDirectory, ActorRegistry, DuplicateEmail},
};

const ACTOR_COLUMNS: &str = "id, name, email, is_privileged, created_at, updated_at";

pub struct SqliteActorDirectory {
    pool: SqlitePool,
}

impl SqliteActorDirectory {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn parse_timestamp(raw: &str, column: &str) -> Result<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(|e| anyhow!("Failed to parse {}: {}", column, e))
    }

    /// Surface the email `UNIQUE` constraint as [`DuplicateEmail`]
    fn map_insert_error(error: sqlx::Error, actor: &Actor) -> anyhow::Error {
        if let sqlx::Error::Database(db_error) = &error {
            if db_error.is_unique_violation() && db_error.message().contains("actors.email") {
                return DuplicateEmail { email: actor.email.clone() }.into();
            }
        }
        error.into()
    }

    /// Helper method to convert database row to Actor entity
    fn row_to_actor(row: &sqlx::sqlite::SqliteRow) -> Result<Actor> {
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Actor {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            is_privileged: row.try_get("is_privileged")?,
            created_at: Self::parse_timestamp(&created_at, "created_at")?,
            updated_at: Self::parse_timestamp(&updated_at, "updated_at")?,
        })
    }
}

#[async_trait]
impl ActorDirectory for SqliteActorDirectory {
    async fn find_by_id(&self, actor_id: &str) -> Result<Option<Actor>> {
        let row = sqlx::query(&format!("SELECT {ACTOR_COLUMNS} FROM actors WHERE id = $1"))
            .bind(actor_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_actor(&row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Actor>> {
        let rows = sqlx::query(&format!("SELECT {ACTOR_COLUMNS} FROM actors ORDER BY rowid"))
            .fetch_all(&self.pool)
            .await?;

        let actors = rows.iter()
            .map(Self::row_to_actor)
            .collect::<Result<Vec<_>>>()?;

        debug!("Loaded {} actors from directory", actors.len());
        Ok(actors)
    }
}

#[async_trait]
impl ActorRegistry for SqliteActorDirectory {
    async fn create(&self, actor: &Actor) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO actors (id, name, email, is_privileged, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#
        )
        .bind(&actor.id)
        .bind(&actor.name)
        .bind(&actor.email)
        .bind(actor.is_privileged)
        .bind(actor.created_at.to_rfc3339())
        .bind(actor.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_insert_error(e, actor))?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Actor>> {
        let row = sqlx::query(&format!("SELECT {ACTOR_COLUMNS} FROM actors WHERE email = $1"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_actor).transpose()
    }

    async fn update(&self, actor: &Actor) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE actors
            SET name = $2, email = $3, is_privileged = $4, updated_at = $5
            WHERE id = $1
            "#
        )
        .bind(&actor.id)
        .bind(&actor.name)
        .bind(&actor.email)
        .bind(actor.is_privileged)
        .bind(actor.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(anyhow!("Cannot update unknown actor: {}", actor.id));
        }

        Ok(())
    }
}
