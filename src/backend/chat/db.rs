/**
 * Database Operations for Chat Messages
 *
 * PostgreSQL implementation of `ChatStore`, writing to the `chat_messages`
 * table created by the migrations under `migrations/`.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::backend::chat::store::ChatStore;
use crate::backend::error::BackendError;
use crate::shared::ChatMessageRecord;

/// Chat store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgChatStore {
    pool: PgPool,
}

impl PgChatStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatStore for PgChatStore {
    fn name(&self) -> &'static str {
        "postgres"
    }

    /// Save a message to the database
    ///
    /// The RFC3339 timestamp is stored as `TIMESTAMPTZ`.
    async fn add_chat_message(&self, record: &ChatMessageRecord) -> Result<(), BackendError> {
        let timestamp = record
            .timestamp
            .parse::<DateTime<Utc>>()
            .map_err(|e| BackendError::store(format!("Failed to parse timestamp: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO chat_messages (id, trip_id, message, sender, is_agent, timestamp, created_at)
            VALUES (gen_random_uuid(), $1, $2, $3, $4, $5, NOW())
            "#
        )
        .bind(&record.trip_id)
        .bind(&record.message)
        .bind(&record.sender)
        .bind(record.is_agent)
        .bind(timestamp)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("[Store] Failed to insert chat message for trip {}: {}", record.trip_id, e);
            e
        })?;

        tracing::debug!("[Store] Saved chat message for trip {}", record.trip_id);
        Ok(())
    }

    async fn health_check(&self) -> Result<(), BackendError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
